//! Ideas API endpoints
//!
//! - Show a single idea
//! - Import ideas into a roadmap's parking lot

use crate::client::ProductPlanClient;
use crate::error::ApiResult;
use crate::response::ApiResponse;
use crate::types::{null_as_default, Links, Timestamps};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Ideas API interface
#[derive(Clone)]
pub struct IdeasApi {
    client: ProductPlanClient,
}

impl IdeasApi {
    /// Create a new ideas API interface
    pub(crate) fn new(client: ProductPlanClient) -> Self {
        Self { client }
    }

    /// Show an idea
    ///
    /// GET /api/ideas/<id>
    pub fn show(&self, id: impl Display) -> ApiResult<ApiResponse<Idea>> {
        self.client.get(&format!("/api/ideas/{id}"))
    }

    /// Import ideas into a roadmap
    ///
    /// POST /api/ideas/actions/import
    ///
    /// The API acknowledges an import without a body, so any body (or none)
    /// is accepted as success.
    pub fn import(&self, import: &IdeasImport) -> ApiResult<ApiResponse<()>> {
        self.client
            .execute(reqwest::Method::POST, "/api/ideas/actions/import", Some(import))?
            .discard()
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Idea entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    /// API path of this idea
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Idea ID, unset on ideas being imported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Idea name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategic_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
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
    pub links: Option<IdeaLinks>,
}

impl Idea {
    /// Create a new idea with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the effort estimate
    #[must_use]
    pub fn with_effort(mut self, effort: u32) -> Self {
        self.effort = Some(effort);
        self
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set a custom field value
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// Links on an idea
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaLinks {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Links::is_empty")]
    pub roadmap: Links,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Links::is_empty")]
    pub external_links: Links,
}

/// Roadmap reference in an import payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapRef {
    /// Roadmap ID
    pub id: u64,
}

/// Import ideas request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeasImport {
    /// Target roadmap
    pub roadmap: RoadmapRef,
    /// Ideas to import
    pub ideas: Vec<Idea>,
}

impl IdeasImport {
    /// Create an import of `ideas` into the roadmap with `roadmap_id`
    pub fn new(roadmap_id: u64, ideas: Vec<Idea>) -> Self {
        Self {
            roadmap: RoadmapRef { id: roadmap_id },
            ideas,
        }
    }
}
