//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod footprint;

use axum::routing::get;
use axum::{Json, Router};

pub use footprint::{footprint_router, FootprintAppState};

use footprint::dto::HealthResponse;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full API router: footprint endpoints plus the health check.
pub fn api_router(state: FootprintAppState) -> Router {
    footprint_router()
        .route("/health", get(health))
        .with_state(state)
}
