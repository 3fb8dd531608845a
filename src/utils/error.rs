use thiserror::Error;

/// 後端錯誤但沒有附帶 `message` 時使用的預設訊息
pub const BACKEND_FALLBACK_MESSAGE: &str = "Job search failed";
/// 請求完全沒有得到回應時的預設訊息
pub const NETWORK_FALLBACK_MESSAGE: &str = "Failed to search for jobs";
/// 回應無法解析時的預設訊息
pub const GENERIC_FALLBACK_MESSAGE: &str = "Failed to fetch jobs.";

#[derive(Error, Debug)]
pub enum JobSearchError {
    #[error("Network failure: {reason}")]
    NetworkFailure { reason: String, timed_out: bool },

    #[error("Backend returned {status}: {}", .message.as_deref().unwrap_or(BACKEND_FALLBACK_MESSAGE))]
    BackendError { status: u16, message: Option<String> },

    #[error("Invalid backend response: {message}")]
    InvalidResponse { message: String },

    #[error("Validation error on {field}: {message}")]
    ValidationFailure { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Backend,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl JobSearchError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationFailure {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NetworkFailure { .. } => ErrorCategory::Network,
            Self::BackendError { .. } | Self::InvalidResponse { .. } => ErrorCategory::Backend,
            Self::ValidationFailure { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Backend | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 是否為可直接重試的錯誤 (同一個搜尋再送一次即可)
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkFailure { .. } => true,
            Self::BackendError { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// 正規化成通知列顯示的單一字串
    ///
    /// 後端提供的 `message` 原樣使用，否則依錯誤種類退回預設訊息。
    pub fn notification_message(&self) -> String {
        match self {
            Self::BackendError {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::BackendError { .. } => BACKEND_FALLBACK_MESSAGE.to_string(),
            Self::NetworkFailure { .. } => NETWORK_FALLBACK_MESSAGE.to_string(),
            Self::ValidationFailure { message, .. } => message.clone(),
            _ => GENERIC_FALLBACK_MESSAGE.to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NetworkFailure { timed_out: true, .. } => {
                "The job search service did not answer in time".to_string()
            }
            Self::NetworkFailure { .. } => "Could not reach the job search service".to_string(),
            Self::BackendError { .. } => self.notification_message(),
            Self::InvalidResponse { .. } => {
                "The job search service sent an unexpected response".to_string()
            }
            Self::ValidationFailure { field, message } => format!("{}: {}", field, message),
            Self::MissingConfigError { field } => {
                format!("Missing required configuration '{}'", field)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for '{}': {}", field, reason)
            }
            Self::ConfigError { message } | Self::ConfigValidationError { message, .. } => {
                format!("Configuration problem: {}", message)
            }
            Self::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the API is running and retry the same search",
            ErrorCategory::Backend => "Adjust the filters or retry later",
            ErrorCategory::Input => "Fix the highlighted filter and search again",
            ErrorCategory::Configuration => "Review the config file and command line flags",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, JobSearchError>;
