//! API status endpoint

use crate::client::ProductPlanClient;
use crate::error::ApiResult;
use crate::response::ApiResponse;
use crate::types::null_as_default;
use serde::{Deserialize, Serialize};

/// Status API interface
#[derive(Clone)]
pub struct StatusApi {
    client: ProductPlanClient,
}

impl StatusApi {
    /// Create a new status API interface
    pub(crate) fn new(client: ProductPlanClient) -> Self {
        Self { client }
    }

    /// Get the status of the API components
    ///
    /// GET /api/status
    pub fn get(&self) -> ApiResult<ApiResponse<StatusReport>> {
        self.client.get("/api/status")
    }
}

/// Status of the API components
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Application status (e.g., "up")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    /// Database status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

/// Application metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Application name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    /// API version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

/// Body of `GET /api/status`: metadata at the top level plus component status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Application metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Component status
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,
}

impl StatusReport {
    /// Whether every reported component is up
    #[must_use]
    pub fn is_up(&self) -> bool {
        let up = |s: &Option<String>| s.as_deref().map_or(true, |v| v == "up");
        up(&self.status.application) && up(&self.status.database)
    }
}
