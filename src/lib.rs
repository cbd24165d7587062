//! Carbon Footprint - Daily CO2e Estimation Service
//!
//! This crate estimates a person's daily greenhouse-gas footprint from
//! lifestyle answers and re-estimates it from daily activity logs and
//! what-if overrides.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
