//! Storage Adapters
//!
//! Implementations of the FootprintRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryFootprintRepository** - Stores baselines and daily logs in
//!   memory (development and testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryFootprintRepository;
//!
//! let repository = Arc::new(InMemoryFootprintRepository::new());
//! ```

mod in_memory_footprint_repository;

pub use in_memory_footprint_repository::InMemoryFootprintRepository;
