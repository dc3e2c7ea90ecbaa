//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - The ports are tiny (one method each)
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//!
//! `serve_*` helpers start a throwaway HTTP server on loopback so the real
//! reqwest adapter can be exercised without touching the network.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
