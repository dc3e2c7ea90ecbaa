//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod earthquakes;

pub use earthquakes::{raw_earthquakes, search_earthquakes};
