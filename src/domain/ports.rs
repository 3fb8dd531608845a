use crate::core::query::{BackendSearchParams, UrlParams};
use crate::domain::model::{JobSearchResponse, PlanTier};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait JobSearchBackend: Send + Sync {
    async fn search_jobs(&self, params: &BackendSearchParams) -> Result<JobSearchResponse>;
}

/// 登入/方案狀態的唯讀視圖，由外部注入
pub trait SessionContext: Send + Sync {
    fn plan(&self) -> PlanTier;
    fn is_authenticated(&self) -> bool;
}

/// 可分享的網址查詢字串
pub trait AddressBar: Send {
    fn current(&self) -> UrlParams;
    /// 以一次明確的搜尋送出替換查詢字串
    fn replace(&mut self, params: &UrlParams);
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn page_limit(&self) -> u32;
    fn auth_token(&self) -> Option<&str>;
    fn plan(&self) -> PlanTier;
    fn is_authenticated(&self) -> bool;
}
