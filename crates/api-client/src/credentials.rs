//! Request authentication
//!
//! A [`Credentials`] implementation contributes the headers that authenticate
//! a request. ProductPlan issues OAuth access tokens, sent as bearer tokens.

use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::fmt;

/// Source of authentication headers for API requests
pub trait Credentials: fmt::Debug + Send + Sync {
    /// Headers to attach to every request
    fn headers(&self) -> ApiResult<HeaderMap>;
}

/// OAuth access token sent as `Authorization: Bearer <token>`
#[derive(Clone)]
pub struct OAuthTokenCredentials {
    token: String,
}

impl OAuthTokenCredentials {
    /// Create credentials from an OAuth access token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for OAuthTokenCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthTokenCredentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Credentials for OAuthTokenCredentials {
    fn headers(&self) -> ApiResult<HeaderMap> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| ApiError::config("OAuth token contains invalid header characters"))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_token_header() {
        let credentials = OAuthTokenCredentials::new("oauth-token");
        let headers = credentials.headers().unwrap();

        assert_eq!(headers.len(), 1);
        assert_eq!(headers[AUTHORIZATION], "Bearer oauth-token");
    }

    #[test]
    fn test_invalid_token_is_config_error() {
        let credentials = OAuthTokenCredentials::new("bad\ntoken");
        assert!(matches!(credentials.headers(), Err(ApiError::Config(_))));
    }

    #[test]
    fn test_debug_redacts_token() {
        let credentials = OAuthTokenCredentials::new("super-secret");
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
