pub mod toml_config;

use crate::core::query::DEFAULT_PAGE_LIMIT;
use crate::core::ConfigProvider;
use crate::domain::model::PlanTier;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use std::time::Duration;

#[cfg(feature = "cli")]
use crate::domain::model::SourceId;
#[cfg(feature = "cli")]
use clap::Parser;

pub use toml_config::TomlConfig;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// 合併設定檔與命令列後的最終設定
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub api_base_url: String,
    pub timeout_seconds: u64,
    pub page_limit: u32,
    pub auth_token: Option<String>,
    pub plan: PlanTier,
    pub authenticated: bool,
    pub verbose: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            page_limit: DEFAULT_PAGE_LIMIT,
            auth_token: None,
            plan: PlanTier::Free,
            authenticated: false,
            verbose: false,
        }
    }
}

impl ConfigProvider for SearchSettings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn page_limit(&self) -> u32 {
        self.page_limit
    }

    fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    fn plan(&self) -> PlanTier {
        self.plan.clone()
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

impl Validate for SearchSettings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api_base_url)?;
        validate_range("api.timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        validate_positive_number("search.limit", self.page_limit, 1)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "jobseek")]
#[command(about = "Search job listings from the command line")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL of the job API (overrides the config file)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Shareable query string to start from, e.g. "?designation=rust&location=Berlin"
    #[arg(long, default_value = "")]
    pub url: String,

    /// Job title, skills, or keywords
    #[arg(short, long)]
    pub designation: Option<String>,

    #[arg(short, long)]
    pub location: Option<String>,

    /// Minimum years of experience (0-15)
    #[arg(long)]
    pub exp_min: Option<u8>,

    /// Maximum years of experience (0-15, 15 means no upper bound)
    #[arg(long)]
    pub exp_max: Option<u8>,

    /// Comma separated job sources (google_jobs, indeed_jobs, linkedin_jobs, monster_jobs)
    #[arg(long, value_delimiter = ',')]
    pub sources: Vec<SourceId>,

    /// Jump to this page after the search
    #[arg(short, long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub limit: Option<u32>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Subscription plan used for result gating (free, premium, ...)
    #[arg(long)]
    pub plan: Option<PlanTier>,

    /// Reset every filter before searching
    #[arg(long)]
    pub clear: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 讀取設定檔 (若有) 並套用命令列覆蓋
    pub fn settings(&self) -> Result<SearchSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.settings()?,
            None => SearchSettings::default(),
        };

        if let Some(api_url) = &self.api_url {
            settings.api_base_url = api_url.clone();
        }
        if let Some(limit) = self.limit {
            settings.page_limit = limit;
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Some(plan) = &self.plan {
            settings.plan = plan.clone();
        }
        settings.verbose |= self.verbose;

        Ok(settings)
    }

    /// 命令列是否帶有任何篩選條件
    pub fn has_filters(&self) -> bool {
        self.designation.is_some()
            || self.location.is_some()
            || self.exp_min.is_some()
            || self.exp_max.is_some()
            || !self.sources.is_empty()
    }
}
