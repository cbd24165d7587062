//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod footprint;

pub use footprint::{
    // Commands and queries
    ComputeWhatIfQuery, EstimateFootprintQuery, GetBaselineQuery, ListDailyLogsQuery,
    LogDailyActivityCommand, SubmitBaselineCommand,
    // Handlers
    ComputeWhatIfHandler, EstimateFootprintHandler, GetBaselineHandler, ListDailyLogsHandler,
    LogDailyActivityHandler, SubmitBaselineHandler,
    // Results
    FootprintEstimate, LogDailyActivityResult, WhatIfResult,
    // Limits
    DEFAULT_DAILY_LOG_LIMIT, MAX_DAILY_LOG_LIMIT,
};
