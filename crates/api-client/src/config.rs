//! Configuration for the ProductPlan API client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default production API host
const DEFAULT_BASE_URL: &str = "https://app.productplan.com";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL that API paths are joined onto
    pub base_url: String,
    /// OAuth access token
    #[serde(skip)]
    pub token: Option<String>,
    /// Custom user agent, appended to the library's own identifier
    pub user_agent: Option<String>,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Skip TLS certificate verification (self-hosted test instances only)
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for `base_url` authenticated with `token`
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url).with_token(token)
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `PRODUCTPLAN_API_TOKEN`: OAuth access token (required)
    /// - `PRODUCTPLAN_API_URL`: Base URL (defaults to the production host)
    /// - `PRODUCTPLAN_USER_AGENT`: Custom user agent suffix
    /// - `PRODUCTPLAN_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        let token = env::var("PRODUCTPLAN_API_TOKEN")
            .map_err(|_| ApiError::missing_env("PRODUCTPLAN_API_TOKEN"))?;

        let base_url =
            env::var("PRODUCTPLAN_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let user_agent = env::var("PRODUCTPLAN_USER_AGENT").ok();

        let timeout = env::var("PRODUCTPLAN_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

        Ok(Self {
            base_url,
            token: Some(token),
            user_agent,
            timeout,
            accept_invalid_certs: false,
        })
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the OAuth token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Builder-style method to set a custom user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to toggle TLS certificate verification
    #[must_use]
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://app.productplan.com");
        assert!(config.token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::new("https://pp.example.com", "token")
            .with_user_agent("roadmap-sync/2.1")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "https://pp.example.com");
        assert_eq!(config.token.as_deref(), Some("token"));
        assert_eq!(config.user_agent.as_deref(), Some("roadmap-sync/2.1"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::default().with_base_url("").validate().is_err());
        assert!(ClientConfig::default()
            .with_base_url("app.productplan.com")
            .validate()
            .is_err());
        assert!(ClientConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }

    #[test]
    fn test_token_is_not_serialized() {
        let config = ClientConfig::new("https://pp.example.com", "secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"timeout\":30"));
    }
}
