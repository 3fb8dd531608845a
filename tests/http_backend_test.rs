use httpmock::prelude::*;
use jobseek::core::query::QueryModel;
use jobseek::core::JobSearchBackend;
use jobseek::domain::model::SourceId;
use jobseek::{HttpJobBackend, JobSearchError};
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};

fn search_body(total: u64, page: u32, total_pages: u32) -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "jobId": "j-1",
                "jobTitle": "Senior Rust Engineer",
                "companyName": "Ferris Labs",
                "companyLogoUrl": "https://cdn.example.com/ferris.png",
                "location": "Berlin",
                "skills": ["rust", "tokio", "postgres"],
                "experienceRange": "5-8 years",
                "datePosted": "2026-10-10",
                "jobUrl": "https://jobs.example.com/j-1",
                "description": "Own the ingestion pipeline"
            }
        ],
        "total": total,
        "page": page,
        "limit": 10,
        "hasMore": page < total_pages,
        "pagination": { "totalPages": total_pages, "currentPage": page, "pages": [1, 2, 3] }
    })
}

fn backend(server: &MockServer) -> HttpJobBackend {
    HttpJobBackend::new(server.url("/api"), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_search_sends_non_default_filters() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/jobs/search")
            .query_param("designation", "rust engineer")
            .query_param("location", "Berlin")
            .query_param("exp_min", "3")
            .query_param("sources", "google_jobs,linkedin_jobs")
            .query_param("page", "2")
            .query_param("limit", "10");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(search_body(21, 2, 3));
    });

    let mut query = QueryModel::new();
    query.set_designation("rust engineer");
    query.set_location("Berlin");
    query.set_experience_range(3, 15).unwrap();
    query.set_sources([SourceId::LinkedinJobs, SourceId::GoogleJobs]);

    let response = assert_ok!(backend(&server).search_jobs(&query.to_request_params(2, 10)).await);

    api_mock.assert();
    assert_eq!(response.total, 21);
    assert_eq!(response.page, 2);
    assert_eq!(response.pagination.total_pages, 3);
    assert_eq!(response.results[0].skills, vec!["rust", "tokio", "postgres"]);
}

#[tokio::test]
async fn test_backend_message_is_surfaced_verbatim() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/jobs/search");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "message": "Invalid experience range" }));
    });

    let err = assert_err!(
        backend(&server)
            .search_jobs(&QueryModel::new().to_request_params(1, 10))
            .await
    );

    api_mock.assert();
    match &err {
        JobSearchError::BackendError { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message.as_deref(), Some("Invalid experience range"));
        }
        other => panic!("expected backend error, got {:?}", other),
    }
    assert_eq!(err.notification_message(), "Invalid experience range");
}

#[tokio::test]
async fn test_backend_error_without_message_uses_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/jobs/search");
        then.status(502).body("<html>Bad Gateway</html>");
    });

    let err = backend(&server)
        .search_jobs(&QueryModel::new().to_request_params(1, 10))
        .await
        .unwrap_err();

    assert!(matches!(err, JobSearchError::BackendError { status: 502, message: None }));
    assert_eq!(err.notification_message(), "Job search failed");
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/jobs/search");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "items": [] }));
    });

    let err = backend(&server)
        .search_jobs(&QueryModel::new().to_request_params(1, 10))
        .await
        .unwrap_err();

    assert!(matches!(err, JobSearchError::InvalidResponse { .. }));
    assert_eq!(err.notification_message(), "Failed to fetch jobs.");
}

#[tokio::test]
async fn test_slow_backend_times_out_as_network_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/jobs/search");
        then.status(200)
            .delay(Duration::from_millis(1500))
            .json_body(search_body(1, 1, 1));
    });

    let backend = HttpJobBackend::new(server.url("/api"), Duration::from_millis(200)).unwrap();
    let err = backend
        .search_jobs(&QueryModel::new().to_request_params(1, 10))
        .await
        .unwrap_err();

    assert!(matches!(err, JobSearchError::NetworkFailure { timed_out: true, .. }));
    assert_eq!(err.notification_message(), "Failed to search for jobs");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_failure() {
    let backend = HttpJobBackend::new("http://127.0.0.1:1/api", Duration::from_secs(2)).unwrap();
    let err = backend
        .search_jobs(&QueryModel::new().to_request_params(1, 10))
        .await
        .unwrap_err();

    assert!(matches!(err, JobSearchError::NetworkFailure { .. }));
}

#[tokio::test]
async fn test_bearer_token_is_attached_per_request() -> anyhow::Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/jobs/search")
            .header("Authorization", "Bearer secret-token");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(search_body(1, 1, 1));
    });

    let backend = HttpJobBackend::new(server.url("/api"), Duration::from_secs(5))?
        .with_token(Some("secret-token".to_string()));
    backend
        .search_jobs(&QueryModel::new().to_request_params(1, 10))
        .await?;

    api_mock.assert();
    Ok(())
}
