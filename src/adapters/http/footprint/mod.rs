//! Footprint HTTP adapter module.
//!
//! Provides REST API endpoints for estimates, baselines, what-if
//! computations and daily logs.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{AuthenticatedUser, FootprintApiError, FootprintAppState};
pub use routes::footprint_router;
