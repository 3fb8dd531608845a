use crate::utils::error::{JobSearchError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(JobSearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(JobSearchError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(JobSearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number<T>(field_name: &str, value: T, min_value: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min_value {
        return Err(JobSearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(JobSearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 表單輸入層的檢查，錯誤以 `ValidationFailure` 回報，不會送出請求
pub fn validate_input_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(JobSearchError::validation(
            field_name,
            format!("{} must be between {} and {}", field_name, min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://example.com/api").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:3000/api").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("api.timeout_seconds", 30u64, 1, 300).is_ok());
        assert!(validate_range("api.timeout_seconds", 301u64, 1, 300).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("search.limit", 10u32, 1).is_ok());
        assert!(validate_positive_number("search.limit", 0u32, 1).is_err());
    }

    #[test]
    fn test_validate_input_range_reports_validation_failure() {
        assert!(validate_input_range("exp_max", 15u8, 0, 15).is_ok());

        match validate_input_range("exp_max", 16u8, 0, 15) {
            Err(JobSearchError::ValidationFailure { field, .. }) => assert_eq!(field, "exp_max"),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

}
