//! Route configuration for footprint endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    compute_what_if, estimate_footprint, get_baseline, list_daily_logs, log_daily_activity,
    submit_baseline, FootprintAppState,
};

/// Creates the footprint router with all endpoints.
///
/// Routes:
/// - `POST /api/footprint/estimate` - Score a profile without storing it
/// - `POST /api/footprint/baseline` - Store the caller's baseline
/// - `GET /api/footprint/baseline` - Fetch the caller's baseline
/// - `POST /api/footprint/what-if` - Score the baseline with an override
/// - `POST /api/footprint/daily-logs` - Record a day's activity
/// - `GET /api/footprint/daily-logs?limit=N` - Most recent daily logs
pub fn footprint_router() -> Router<FootprintAppState> {
    Router::new()
        .route("/api/footprint/estimate", post(estimate_footprint))
        .route(
            "/api/footprint/baseline",
            get(get_baseline).post(submit_baseline),
        )
        .route("/api/footprint/what-if", post(compute_what_if))
        .route(
            "/api/footprint/daily-logs",
            get(list_daily_logs).post(log_daily_activity),
        )
}
