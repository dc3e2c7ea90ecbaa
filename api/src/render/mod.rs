//! Render module
//!
//! Human-readable output for clients that do not ask for JSON.

pub mod renderer;

pub use renderer::{render_raw, render_search};
