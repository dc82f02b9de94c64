//! Bars API endpoints
//!
//! - List bars owned by the authenticated user
//! - Update a bar's attributes

use crate::client::ProductPlanClient;
use crate::error::ApiResult;
use crate::query::{add_query_options, ListOptions};
use crate::response::ApiResponse;
use crate::types::{blank_date_as_none, null_as_default, Links, Timestamps};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bars API interface
#[derive(Clone)]
pub struct BarsApi {
    client: ProductPlanClient,
}

impl BarsApi {
    /// Create a new bars API interface
    pub(crate) fn new(client: ProductPlanClient) -> Self {
        Self { client }
    }

    /// List bars owned by the authenticated user
    ///
    /// GET /api/bars
    pub fn list(&self, options: Option<&ListOptions>) -> ApiResult<ApiResponse<Vec<Bar>>> {
        let path = add_query_options("/api/bars", options);
        self.client.get(&path)
    }

    /// Update a bar
    ///
    /// PATCH /api/bars/<id>
    ///
    /// The API usually answers `204 No Content`; the updated bar is returned
    /// only when the response carries one.
    pub fn update(&self, id: u64, update: &BarUpdate) -> ApiResult<ApiResponse<Option<Bar>>> {
        self.client
            .execute(reqwest::Method::PATCH, &format!("/api/bars/{id}"), Some(update))?
            .decode_optional()
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Bar entity: an item on a roadmap timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// API path of this bar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Bar ID
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    /// Bar name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// First day on the timeline
    #[serde(default, deserialize_with = "blank_date_as_none", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Last day on the timeline
    #[serde(default, deserialize_with = "blank_date_as_none", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategic_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Completion, 0 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_done: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Custom field values, e.g. `pp_lanes`, `pp_legend`
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
    /// Creation and update instants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Timestamps>,
    /// Related resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<BarLinks>,
}

/// Links on a bar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarLinks {
    /// Roadmap the bar sits on
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Links::is_empty")]
    pub roadmap: Links,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Links::is_empty")]
    pub parent_bar: Links,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Links::is_empty")]
    pub child_bars: Links,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Links::is_empty")]
    pub external_links: Links,
}

/// Bar attributes to change. Unset attributes are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarUpdate {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New first day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// New last day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategic_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// New completion, 0 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_done: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<u32>,
    /// Replacement tag list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Custom field values to set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
}

impl BarUpdate {
    /// Create an empty update
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename the bar
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Move the bar to a new date range
    #[must_use]
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Set the completion percentage
    #[must_use]
    pub fn with_percent_done(mut self, percent_done: u32) -> Self {
        self.percent_done = Some(percent_done);
        self
    }

    /// Whether the update changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
