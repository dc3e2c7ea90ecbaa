//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod usgs;

pub use usgs::UsgsFeedClient;
