//! Configuration validation rules.
//!
//! - `url`, when set, must be an absolute http(s) URL
//! - `concurrency` and `timeout_secs` must be at least 1
//! - header names must be non-empty

use crate::config::schema::ProbeConfig;
use crate::error::{ProbeError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Every problem is collected rather than stopping at the first one.
pub fn validate_config(config: &ProbeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(url) = config.target_url() {
        match reqwest::Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => errors.push(ValidationError::new(
                "unsupported-scheme",
                format!("url '{}' uses unsupported scheme '{}'", url, parsed.scheme()),
            )),
            Err(e) => errors.push(ValidationError::new(
                "invalid-url",
                format!("url '{}' is not valid: {}", url, e),
            )),
        }
    }

    if config.concurrency == 0 {
        errors.push(ValidationError::new(
            "invalid-concurrency",
            "concurrency must be at least 1",
        ));
    }

    if config.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "invalid-timeout",
            "timeout_secs must be at least 1",
        ));
    }

    if config.headers.keys().any(|name| name.trim().is_empty()) {
        errors.push(ValidationError::new(
            "empty-header-name",
            "header names must not be empty",
        ));
    }

    errors
}

/// Validate, folding every problem into one `ConfigValidationError`.
pub fn validate(config: &ProbeConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(ProbeError::ConfigValidationError { message })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(config: &ProbeConfig) -> Vec<String> {
        validate_config(config).into_iter().map(|e| e.rule).collect()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&ProbeConfig::default()).is_ok());
    }

    #[test]
    fn http_and_https_urls_are_valid() {
        for url in ["http://localhost:8080/orders", "https://api.example.com/v1/x"] {
            let config = ProbeConfig {
                url: Some(url.into()),
                ..Default::default()
            };
            assert!(validate(&config).is_ok(), "{} should be valid", url);
        }
    }

    #[test]
    fn blank_url_is_valid_but_unconfigured() {
        let config = ProbeConfig {
            url: Some(String::new()),
            ..Default::default()
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn relative_url_is_invalid() {
        let config = ProbeConfig {
            url: Some("/orders".into()),
            ..Default::default()
        };
        assert_eq!(rules(&config), ["invalid-url"]);
    }

    #[test]
    fn non_http_scheme_is_invalid() {
        let config = ProbeConfig {
            url: Some("ftp://example.com/x".into()),
            ..Default::default()
        };
        assert_eq!(rules(&config), ["unsupported-scheme"]);
    }

    #[test]
    fn collects_every_error() {
        let mut config = ProbeConfig {
            url: Some("nonsense".into()),
            concurrency: 0,
            timeout_secs: 0,
            ..Default::default()
        };
        config.headers.insert(" ".into(), "x".into());

        assert_eq!(
            rules(&config),
            [
                "invalid-url",
                "invalid-concurrency",
                "invalid-timeout",
                "empty-header-name"
            ]
        );
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("concurrency must be at least 1"));
        assert!(err.contains("timeout_secs must be at least 1"));
    }
}
