//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one resource of the
//! ProductPlan REST API.
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | `status` | `GET /api/status` |
//! | `ideas` | `GET /api/ideas/{id}`, `POST /api/ideas/actions/import` |
//! | `roadmaps` | `GET /api/roadmaps`, `GET /api/roadmaps/{id}`, `GET /api/roadmaps/{id}/bars` |
//! | `bars` | `GET /api/bars`, `PATCH /api/bars/{id}` |

pub mod bars;
pub mod ideas;
pub mod roadmaps;
pub mod status;

pub use bars::BarsApi;
pub use ideas::IdeasApi;
pub use roadmaps::RoadmapsApi;
pub use status::StatusApi;
