//! List options and query string encoding

use crate::types::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anything that can be rendered as URL query parameters
pub trait QueryOptions {
    /// Key/value pairs to set on the query string. Unset options are omitted.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Common options for list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Filter expression, e.g. `name=Roadmap10`
    pub filters: Option<String>,
    /// The page to return
    pub page: Option<u32>,
    /// The number of entries to return per page
    pub items: Option<u32>,
    /// Comma-separated `field[:direction]` list, e.g. `name:desc,expiration:desc`
    pub order: Option<String>,
}

impl ListOptions {
    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter expression
    #[must_use]
    pub fn with_filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    /// Set the page number
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_items(mut self, items: u32) -> Self {
        self.items = Some(items);
        self
    }

    /// Set the sort order
    #[must_use]
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }
}

impl QueryOptions for ListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(ref filters) = self.filters {
            pairs.push(("filters", filters.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(items) = self.items {
            pairs.push(("items", items.to_string()));
        }
        if let Some(ref order) = self.order {
            pairs.push(("order", order.clone()));
        }

        pairs
    }
}

/// Options for listing roadmaps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapListOptions {
    /// Include roadmaps shared with the authenticated user
    pub include_shared: bool,
    /// Include roadmap versions
    pub include_versions: bool,
    /// Paging, filtering and ordering
    #[serde(flatten)]
    pub list: ListOptions,
}

impl RoadmapListOptions {
    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Include shared roadmaps
    #[must_use]
    pub fn include_shared(mut self) -> Self {
        self.include_shared = true;
        self
    }

    /// Include roadmap versions
    #[must_use]
    pub fn include_versions(mut self) -> Self {
        self.include_versions = true;
        self
    }

    /// Replace the common list options
    #[must_use]
    pub fn with_list(mut self, list: ListOptions) -> Self {
        self.list = list;
        self
    }
}

impl From<ListOptions> for RoadmapListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

impl QueryOptions for RoadmapListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.list.query_pairs();

        if self.include_shared {
            pairs.push(("include_shared", "true".to_string()));
        }
        if self.include_versions {
            pairs.push(("include_versions", "true".to_string()));
        }

        pairs
    }
}

/// Page descriptor returned alongside paginated responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// The page this response holds, starting at 1
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_page: u32,
    /// Entries per page
    #[serde(default, deserialize_with = "null_as_default")]
    pub per_page: u32,
    /// Number of pages available
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
    /// Number of entries across all pages
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_entries: u64,
}

/// Append `options` to `path` as a query string.
///
/// `None` leaves the path untouched. Otherwise the options are merged over
/// any query already on the path and the result is emitted sorted by key.
pub(crate) fn add_query_options<O: QueryOptions + ?Sized>(path: &str, options: Option<&O>) -> String {
    let Some(options) = options else {
        return path.to_string();
    };

    let (base, existing) = path.split_once('?').unwrap_or((path, ""));

    let mut params: BTreeMap<String, String> = url::form_urlencoded::parse(existing.as_bytes())
        .into_owned()
        .collect();
    for (key, value) in options.query_pairs() {
        params.insert(key.to_string(), value);
    }

    if params.is_empty() {
        return base.to_string();
    }

    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&params)
        .finish();
    format!("{base}?{query}")
}
