//! USGS adapter
//!
//! HTTP client for the USGS GeoJSON summary feeds and the payload decoder.

pub mod client;
pub mod geojson;

pub use client::UsgsFeedClient;
