//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `footprint` - Emission factors, calculators, aggregation, overrides,
//!   daily logs, categories and recommendations

pub mod footprint;
pub mod foundation;
