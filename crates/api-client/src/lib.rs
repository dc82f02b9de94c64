//! Typed client for the ProductPlan REST API
//!
//! This crate provides a blocking HTTP client for the ProductPlan API,
//! covering API status, ideas, roadmaps and bars.
//!
//! # Features
//!
//! - **Environment-based configuration**: Load the base URL and token from environment variables
//! - **Bearer authentication**: OAuth access tokens behind a pluggable [`Credentials`] trait
//! - **Typed resources**: Responses decode into plain records with defaults for absent fields
//! - **Request correlation**: Each request is traced with a unique ID for debugging
//!
//! # Example
//!
//! ```rust,no_run
//! use productplan_api_client::{ListOptions, ProductPlanClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client with environment configuration
//!     let client = ProductPlanClient::new()?;
//!
//!     // Check status
//!     let status = client.status().get()?.into_data();
//!     println!("Application: {:?}", status.status.application);
//!
//!     // Find bars by name
//!     let options = ListOptions::new().with_filters("name=Launch");
//!     for bar in client.bars().list(Some(&options))?.into_data() {
//!         println!("{} {:?}..{:?}", bar.name, bar.start_date, bar.end_date);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod query;
pub mod response;
pub mod types;

#[cfg(test)]
mod test_support;

pub use client::{ProductPlanClient, DEFAULT_USER_AGENT, VERSION};
pub use config::ClientConfig;
pub use credentials::{Credentials, OAuthTokenCredentials};
pub use endpoints::bars::{Bar, BarLinks, BarUpdate};
pub use endpoints::ideas::{Idea, IdeaLinks, IdeasImport, RoadmapRef};
pub use endpoints::roadmaps::{Roadmap, RoadmapLinks};
pub use endpoints::status::{Metadata, Status, StatusReport};
pub use error::{ApiError, ApiResult};
pub use query::{ListOptions, Pagination, QueryOptions, RoadmapListOptions};
pub use response::{ApiResponse, RawResponse};
pub use types::{Links, Timestamps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::ProductPlanClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{BarsApi, IdeasApi, RoadmapsApi, StatusApi};
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::query::{ListOptions, RoadmapListOptions};
}
