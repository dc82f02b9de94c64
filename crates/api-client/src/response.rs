//! Decoded API responses

use crate::error::{ApiError, ApiResult};
use crate::query::Pagination;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;

/// A typed API response
///
/// Carries the decoded body along with the HTTP status, response headers and
/// the page descriptor when the body included one.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Page descriptor, present when the body is an object with `pagination`
    pub pagination: Option<Pagination>,
    /// Decoded body
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Consume the response, keeping only the decoded body
    pub fn into_data(self) -> T {
        self.data
    }

    /// Transform the decoded body, keeping the HTTP metadata
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            status: self.status,
            headers: self.headers,
            pagination: self.pagination,
            data: f(self.data),
        }
    }
}

/// A successful response whose body has not been decoded yet
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body text
    pub body: String,
}

impl RawResponse {
    /// Decode the body as `T`. An empty body is an [`ApiError::EmptyBody`].
    pub fn decode<T: DeserializeOwned>(self) -> ApiResult<ApiResponse<T>> {
        if self.body.trim().is_empty() {
            return Err(ApiError::EmptyBody);
        }

        let value: serde_json::Value = serde_json::from_str(&self.body)?;
        let pagination = match value.get("pagination") {
            Some(p) if !p.is_null() => Some(Pagination::deserialize(p)?),
            _ => None,
        };
        let data = serde_json::from_value(value)?;

        Ok(ApiResponse {
            status: self.status,
            headers: self.headers,
            pagination,
            data,
        })
    }

    /// Decode the body as `T`, treating an empty body as `None`
    pub fn decode_optional<T: DeserializeOwned>(self) -> ApiResult<ApiResponse<Option<T>>> {
        if self.body.trim().is_empty() {
            return Ok(ApiResponse {
                status: self.status,
                headers: self.headers,
                pagination: None,
                data: None,
            });
        }

        self.decode().map(|response| response.map(Some))
    }

    /// Accept any body, empty or not, keeping only the HTTP metadata
    pub fn discard(self) -> ApiResult<ApiResponse<()>> {
        self.decode_optional::<IgnoredAny>()
            .map(|response| response.map(|_| ()))
    }
}
