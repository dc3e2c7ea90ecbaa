//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod earthquake_service;
pub mod feed_cache;
pub mod feed_config;
pub mod filter;
pub mod presentation;

pub use earthquake_service::{EarthquakeService, SearchResult};
pub use presentation::TableRow;
