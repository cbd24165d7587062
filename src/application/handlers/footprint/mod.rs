//! Footprint handlers.
//!
//! Commands and queries around the footprint engine: baseline submission
//! and lookup, what-if recomputation, daily logs and one-off estimates.

mod compute_what_if;
mod estimate_footprint;
mod get_baseline;
mod list_daily_logs;
mod log_daily_activity;
mod submit_baseline;

#[cfg(test)]
pub(crate) mod testing;

pub use compute_what_if::{ComputeWhatIfHandler, ComputeWhatIfQuery, WhatIfResult};
pub use estimate_footprint::{EstimateFootprintHandler, EstimateFootprintQuery, FootprintEstimate};
pub use get_baseline::{GetBaselineHandler, GetBaselineQuery};
pub use list_daily_logs::{
    ListDailyLogsHandler, ListDailyLogsQuery, DEFAULT_DAILY_LOG_LIMIT, MAX_DAILY_LOG_LIMIT,
};
pub use log_daily_activity::{
    LogDailyActivityCommand, LogDailyActivityHandler, LogDailyActivityResult,
};
pub use submit_baseline::{SubmitBaselineCommand, SubmitBaselineHandler};
