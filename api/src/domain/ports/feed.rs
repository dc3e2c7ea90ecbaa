//! Earthquake feed port trait
//!
//! Defines the interface for fetching events for one feed window.

use async_trait::async_trait;

use crate::domain::entities::{EarthquakeEvent, FeedWindow};
use crate::error::FeedError;

/// Source of raw earthquake events
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch every event the feed publishes for `window`, in feed order.
    ///
    /// Malformed individual features are skipped; a malformed payload fails
    /// with `FeedError::Parse`.
    async fn fetch(&self, window: FeedWindow) -> Result<Vec<EarthquakeEvent>, FeedError>;
}
