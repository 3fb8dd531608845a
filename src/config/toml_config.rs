use crate::config::SearchSettings;
use crate::domain::model::PlanTier;
use crate::utils::error::{JobSearchError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub search: Option<SearchConfig>,
    pub session: Option<SessionConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub plan: Option<String>,
    pub authenticated: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(JobSearchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| JobSearchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${JOBSEEK_TOKEN})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| JobSearchError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 轉成執行用的設定，未填的欄位使用預設值
    pub fn settings(&self) -> Result<SearchSettings> {
        let defaults = SearchSettings::default();

        if self.api.base_url.trim().is_empty() {
            return Err(JobSearchError::MissingConfigError {
                field: "api.base_url".to_string(),
            });
        }

        let plan = match self.session.as_ref().and_then(|s| s.plan.as_deref()) {
            Some(plan) => plan.parse::<PlanTier>()?,
            None => defaults.plan.clone(),
        };

        // 沒被替換掉的 ${VAR} 視為沒有設定 token
        let auth_token = self
            .api
            .token
            .as_ref()
            .filter(|token| !token.is_empty())
            .filter(|token| {
                let unresolved = token.starts_with("${");
                if unresolved {
                    tracing::warn!("⚠️ API token placeholder {} was not resolved", token);
                }
                !unresolved
            })
            .cloned();

        let authenticated = self
            .session
            .as_ref()
            .and_then(|s| s.authenticated)
            .unwrap_or(auth_token.is_some());

        Ok(SearchSettings {
            api_base_url: self.api.base_url.clone(),
            timeout_seconds: self.api.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            page_limit: self
                .search
                .as_ref()
                .and_then(|s| s.limit)
                .unwrap_or(defaults.page_limit),
            auth_token,
            plan,
            authenticated,
            verbose: self
                .logging
                .as_ref()
                .and_then(|l| l.verbose)
                .unwrap_or(false),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.settings()?.validate()
    }
}
