//! HTTP client core
//!
//! Every request goes through [`ProductPlanClient::execute`], which joins the
//! path onto the base URL, attaches the standard and credential headers,
//! sends the request and classifies the status code.

use crate::config::ClientConfig;
use crate::credentials::{Credentials, OAuthTokenCredentials};
use crate::endpoints::{BarsApi, IdeasApi, RoadmapsApi, StatusApi};
use crate::error::{ApiError, ApiResult};
use crate::response::{ApiResponse, RawResponse};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn, Span};
use url::Url;
use uuid::Uuid;

/// Library version, used in the user agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent when no custom user agent is configured
pub const DEFAULT_USER_AGENT: &str = concat!("productplan-rust/", env!("CARGO_PKG_VERSION"));

/// API version header
const X_API_VERSION: &str = "x-api-version";

/// API version requested on every call
const API_VERSION: &str = "1";

/// Blocking ProductPlan API client
///
/// Cheap to clone; configuration and credentials are shared and never
/// mutated after construction.
#[derive(Clone)]
pub struct ProductPlanClient {
    inner: Client,
    config: Arc<ClientConfig>,
    credentials: Arc<dyn Credentials>,
    user_agent: Arc<str>,
}

impl ProductPlanClient {
    /// Create a new client with configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client authenticated with the configured OAuth token
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        let token = config
            .token
            .clone()
            .ok_or_else(|| ApiError::config("an OAuth token is required"))?;
        Self::with_credentials(config, OAuthTokenCredentials::new(token))
    }

    /// Create a new client with explicit credentials
    pub fn with_credentials(
        config: ClientConfig,
        credentials: impl Credentials + 'static,
    ) -> ApiResult<Self> {
        config.validate()?;
        Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let user_agent = format_user_agent(config.user_agent.as_deref());

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            HeaderName::from_static(X_API_VERSION),
            HeaderValue::from_static(API_VERSION),
        );
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&user_agent)
                .map_err(|_| ApiError::config("user agent contains invalid header characters"))?,
        );

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            credentials: Arc::new(credentials),
            user_agent: user_agent.into(),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the user agent sent with every request
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access the API status endpoint
    #[must_use]
    pub fn status(&self) -> StatusApi {
        StatusApi::new(self.clone())
    }

    /// Access idea endpoints
    #[must_use]
    pub fn ideas(&self) -> IdeasApi {
        IdeasApi::new(self.clone())
    }

    /// Access roadmap endpoints
    #[must_use]
    pub fn roadmaps(&self) -> RoadmapsApi {
        RoadmapsApi::new(self.clone())
    }

    /// Access bar endpoints
    #[must_use]
    pub fn bars(&self) -> BarsApi {
        BarsApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request and decode the body
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<ApiResponse<T>> {
        self.execute(Method::GET, path, Option::<&()>::None)?
            .decode()
    }

    /// Perform a POST request with a JSON body and decode the response
    pub fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<ApiResponse<T>> {
        self.execute(Method::POST, path, Some(body))?.decode()
    }

    /// Perform a PATCH request with a JSON body and decode the response
    pub fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<ApiResponse<T>> {
        self.execute(Method::PATCH, path, Some(body))?.decode()
    }

    /// Resolve a path against the base URL
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build a request with the standard and credential headers attached
    pub fn request_builder(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let headers = self.credentials.headers()?;
        Ok(self.inner.request(method, self.url_for(path)).headers(headers))
    }

    /// Send a request and return the undecoded body.
    ///
    /// Statuses outside 2xx are turned into [`ApiError::Api`].
    #[instrument(skip(self, body), fields(request_id))]
    pub fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<RawResponse> {
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());

        let url = self.url_for(path);
        let mut request = self.request_builder(method.clone(), path)?;
        if let Some(b) = body {
            request = request.json(b);
        }

        debug!(method = %method, url = %url, "Executing request");
        let start = Instant::now();

        let response = request.send()?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text()?;

        debug!(
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Response received"
        );

        if !status.is_success() {
            let err = ApiError::from_response(method.as_str(), url, status, &body);
            warn!(error = %err, "API returned an error response");
            return Err(err);
        }

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Build the user agent, appending a custom one when provided
fn format_user_agent(custom: Option<&str>) -> String {
    match custom {
        Some(custom) if !custom.is_empty() => format!("{DEFAULT_USER_AGENT} {custom}"),
        _ => DEFAULT_USER_AGENT.to_string(),
    }
}
