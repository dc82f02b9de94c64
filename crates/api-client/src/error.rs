//! Error types for the API client

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing environment variable
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// API returned a status outside 2xx
    #[error("{method} {url}: {status} {message}")]
    Api {
        /// HTTP method of the failed request
        method: String,
        /// Full URL of the failed request
        url: String,
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// A value was expected but the response body was empty
    #[error("Response body is empty")]
    EmptyBody,

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error payload returned by the API on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing env var error
    pub fn missing_env(var: impl Into<String>) -> Self {
        Self::MissingEnvVar(var.into())
    }

    /// Build an API error from a failed response.
    ///
    /// The message is taken from the `{"message": ...}` error body, falling
    /// back to the raw body text when it is not in that shape.
    pub fn from_response(
        method: impl Into<String>,
        url: impl Into<String>,
        status: StatusCode,
        body: &str,
    ) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.message)
            .unwrap_or_else(|_| body.trim().to_string());

        Self::Api {
            method: method.into(),
            url: url.into(),
            status: status.as_u16(),
            message,
        }
    }

    /// HTTP status code, if this error came from an API response
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }

    /// Check if the requested resource does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
