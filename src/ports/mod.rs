//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `FootprintRepository` - Baseline and daily-log persistence

mod footprint_repository;

pub use footprint_repository::{BaselineRecord, DailyLogRecord, FootprintRepository};
