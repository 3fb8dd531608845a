use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::JobSearchError;

/// 後端回傳的職缺，對本模組來說是唯讀的值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_id: String,
    pub job_title: String,
    pub company_name: String,
    #[serde(default)]
    pub company_logo_url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_range: String,
    /// ISO 日期字串，保留原始格式
    #[serde(default)]
    pub date_posted: String,
    #[serde(default)]
    pub job_url: String,
    #[serde(default)]
    pub description: String,
}

impl Job {
    /// 解析 `datePosted`，同時接受 RFC 3339 與純日期
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(&self.date_posted) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&self.date_posted, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_pages: u32,
    pub current_page: u32,
    #[serde(default)]
    pub pages: Vec<u32>,
}

/// `GET /jobs/search` 的回應本體
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchResponse {
    pub results: Vec<Job>,
    pub total: u64,
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub has_more: bool,
    pub pagination: Pagination,
}

/// 非 2xx 回應的本體，只關心 `message`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// 一次成功搜尋後的結果，每次都整批替換
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResult {
    pub jobs: Vec<Job>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
}

impl From<JobSearchResponse> for SearchResult {
    fn from(response: JobSearchResponse) -> Self {
        Self {
            jobs: response.results,
            total: response.total,
            page: response.page.max(1),
            total_pages: response.pagination.total_pages.max(1),
        }
    }
}

/// 訂閱方案，只有 `Free` 會限制顯示數量
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlanTier {
    #[default]
    Free,
    Premium,
    Other(String),
}

impl PlanTier {
    pub fn as_str(&self) -> &str {
        match self {
            PlanTier::Free => "free",
            PlanTier::Premium => "premium",
            PlanTier::Other(name) => name,
        }
    }
}

impl FromStr for PlanTier {
    type Err = JobSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "" => Err(JobSearchError::validation("plan", "Plan name cannot be empty")),
            "free" => Ok(PlanTier::Free),
            "premium" => Ok(PlanTier::Premium),
            _ => Ok(PlanTier::Other(name)),
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已知的職缺來源，宣告順序即送往後端時的順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    GoogleJobs,
    IndeedJobs,
    LinkedinJobs,
    MonsterJobs,
}

impl SourceId {
    pub const ALL: [SourceId; 4] = [
        SourceId::GoogleJobs,
        SourceId::IndeedJobs,
        SourceId::LinkedinJobs,
        SourceId::MonsterJobs,
    ];

    pub const DEFAULT_SELECTION: [SourceId; 2] = [SourceId::GoogleJobs, SourceId::IndeedJobs];

    pub fn id(&self) -> &'static str {
        match self {
            SourceId::GoogleJobs => "google_jobs",
            SourceId::IndeedJobs => "indeed_jobs",
            SourceId::LinkedinJobs => "linkedin_jobs",
            SourceId::MonsterJobs => "monster_jobs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceId::GoogleJobs => "Google Jobs",
            SourceId::IndeedJobs => "Indeed",
            SourceId::LinkedinJobs => "LinkedIn",
            SourceId::MonsterJobs => "Monster",
        }
    }
}

impl FromStr for SourceId {
    type Err = JobSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SourceId::ALL
            .into_iter()
            .find(|source| source.id() == wanted)
            .ok_or_else(|| {
                JobSearchError::validation(
                    "sources",
                    format!(
                        "Unknown job source '{}'. Known sources: {}",
                        wanted,
                        SourceId::ALL.map(|s| s.id()).join(", ")
                    ),
                )
            })
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_response() {
        let body = serde_json::json!({
            "results": [{
                "jobId": "j-1",
                "jobTitle": "Rust Engineer",
                "companyName": "Acme",
                "companyLogoUrl": "",
                "location": "Berlin",
                "skills": ["rust", "tokio"],
                "experienceRange": "2-5 years",
                "datePosted": "2026-10-01",
                "jobUrl": "https://jobs.example.com/j-1",
                "description": "Build things"
            }],
            "total": 41,
            "page": 2,
            "limit": 10,
            "hasMore": true,
            "pagination": { "totalPages": 5, "currentPage": 2, "pages": [1, 2, 3, 4, 5] }
        });

        let response: JobSearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.results[0].job_title, "Rust Engineer");
        assert_eq!(response.pagination.total_pages, 5);

        let result = SearchResult::from(response);
        assert_eq!(result.total, 41);
        assert_eq!(result.page, 2);
        assert_eq!(result.total_pages, 5);
    }

    #[test]
    fn test_search_result_normalizes_zero_pages() {
        let response = JobSearchResponse {
            results: vec![],
            total: 0,
            page: 0,
            limit: 10,
            has_more: false,
            pagination: Pagination {
                total_pages: 0,
                current_page: 0,
                pages: vec![],
            },
        };

        let result = SearchResult::from(response);
        assert_eq!(result.page, 1);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_plan_tier_parsing() {
        assert_eq!("free".parse::<PlanTier>().unwrap(), PlanTier::Free);
        assert_eq!("Premium".parse::<PlanTier>().unwrap(), PlanTier::Premium);
        assert_eq!(
            "enterprise".parse::<PlanTier>().unwrap(),
            PlanTier::Other("enterprise".to_string())
        );
        assert!("".parse::<PlanTier>().is_err());
    }

    #[test]
    fn test_source_id_parsing() {
        assert_eq!("linkedin_jobs".parse::<SourceId>().unwrap(), SourceId::LinkedinJobs);
        assert!("craigslist".parse::<SourceId>().is_err());
        assert_eq!(SourceId::MonsterJobs.label(), "Monster");
    }

    #[test]
    fn test_posted_at_accepts_date_and_timestamp() {
        let mut job: Job = serde_json::from_value(serde_json::json!({
            "jobId": "1", "jobTitle": "t", "companyName": "c",
            "datePosted": "2026-10-01"
        }))
        .unwrap();
        assert!(job.posted_at().is_some());

        job.date_posted = "2026-10-01T08:30:00Z".to_string();
        assert!(job.posted_at().is_some());

        job.date_posted = "last tuesday".to_string();
        assert!(job.posted_at().is_none());
    }
}
