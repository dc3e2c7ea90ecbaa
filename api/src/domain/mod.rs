//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Earthquake events, filter criteria and result sets
//! - `ports`: Trait definitions for the feed and the clock

pub mod entities;
pub mod ports;
