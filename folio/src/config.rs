//! API client configuration
//!
//! The base URL is an explicit value handed to [`crate::api::ApiClient`];
//! nothing reads the environment after argument parsing.

use std::time::Duration;

use reqwest::Url;

use crate::domain::ConfigError;

/// Base URL used when neither `--api-url` nor the environment sets one
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Environment variable selecting the API base URL
pub const API_URL_ENV: &str = "PROFILE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host (+ optional path prefix), without a trailing slash
    pub base_url: String,
    /// Per-request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_string(), timeout: None }
    }
}

impl ApiConfig {
    /// Validate `base_url` and normalize away trailing slashes.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not parse or is
    /// not `http`/`https`.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let invalid = |reason: String| ConfigError::InvalidBaseUrl { url: base_url.to_string(), reason };

        let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        Ok(Self { base_url: trimmed.to_string(), timeout: None })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for an API path such as `/api/profile`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = ApiConfig::default();
        assert_eq!(config.endpoint("/api/profile"), "http://localhost:5000/api/profile");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.example.com/v1/").unwrap();
        assert_eq!(config.base_url, "https://api.example.com/v1");
        assert_eq!(
            config.endpoint("/api/profile/search"),
            "https://api.example.com/v1/api/profile/search"
        );
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(ApiConfig::new("not a url").is_err());
        assert!(ApiConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_with_timeout() {
        let config = ApiConfig::default().with_timeout(Some(Duration::from_secs(5)));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
