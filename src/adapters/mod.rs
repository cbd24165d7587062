//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API (axum)
//! - `storage` - Footprint repository implementations

pub mod http;
pub mod storage;

pub use storage::InMemoryFootprintRepository;
