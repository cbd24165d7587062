//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types shared by the
//! footprint domain and the layers around it.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DailyLogId, UserId};
pub use timestamp::Timestamp;
