use crate::core::query::BackendSearchParams;
use crate::domain::model::{ErrorBody, JobSearchResponse};
use crate::domain::ports::{ConfigProvider, JobSearchBackend};
use crate::utils::error::{JobSearchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const SEARCH_PATH: &str = "/jobs/search";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `GET {base_url}/jobs/search` 的 reqwest 實作
#[derive(Debug, Clone)]
pub struct HttpJobBackend {
    client: Client,
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl HttpJobBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| JobSearchError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            timeout,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let backend = Self::new(config.api_base_url(), config.request_timeout())?;
        Ok(backend.with_token(config.auth_token().map(str::to_string)))
    }

    /// 每次請求都帶上 Bearer token，不依賴全域預設 header
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }

    fn network_failure(&self, error: reqwest::Error) -> JobSearchError {
        let timed_out = error.is_timeout();
        let reason = if timed_out {
            format!("request timed out after {:?}", self.timeout)
        } else {
            error.to_string()
        };
        JobSearchError::NetworkFailure { reason, timed_out }
    }
}

#[async_trait]
impl JobSearchBackend for HttpJobBackend {
    async fn search_jobs(&self, params: &BackendSearchParams) -> Result<JobSearchResponse> {
        let url = self.search_url();
        tracing::debug!("Making API request to: {} {:?}", url, params.to_query_pairs());

        let mut request = self.client.get(&url).query(&params.to_query_pairs());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| self.network_failure(e))?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            return response.json::<JobSearchResponse>().await.map_err(|e| {
                if e.is_timeout() {
                    self.network_failure(e)
                } else {
                    JobSearchError::InvalidResponse {
                        message: e.to_string(),
                    }
                }
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);

        Err(JobSearchError::BackendError {
            status: status.as_u16(),
            message,
        })
    }
}
