//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing and let tests
//! verify how often the feed was hit.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::entities::{EarthquakeEvent, FeedWindow};
use crate::domain::ports::{Clock, FeedSource};
use crate::error::FeedError;

// ============================================================================
// Manual Clock
// ============================================================================

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn at_millis(millis: i64) -> Self {
        Self {
            now: Mutex::new(DateTime::from_timestamp_millis(millis).unwrap()),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        *self.now.lock().unwrap() += Duration::seconds(secs);
    }

    pub fn rewind_secs(&self, secs: i64) {
        *self.now.lock().unwrap() -= Duration::seconds(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ============================================================================
// Mock Feed Source
// ============================================================================

type FailureFactory = Box<dyn Fn() -> FeedError + Send + Sync>;

#[derive(Default)]
pub struct MockFeedSource {
    events: HashMap<FeedWindow, Vec<EarthquakeEvent>>,
    failure: Option<FailureFactory>,
    calls: AtomicUsize,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events returned for `window`; other windows return an empty feed
    pub fn with_events(mut self, window: FeedWindow, events: Vec<EarthquakeEvent>) -> Self {
        self.events.insert(window, events);
        self
    }

    /// Every fetch fails with the error `make` builds
    pub fn failing_with<F>(mut self, make: F) -> Self
    where
        F: Fn() -> FeedError + Send + Sync + 'static,
    {
        self.failure = Some(Box::new(make));
        self
    }

    /// Number of fetches made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch(&self, window: FeedWindow) -> Result<Vec<EarthquakeEvent>, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(make) = &self.failure {
            return Err(make());
        }
        Ok(self.events.get(&window).cloned().unwrap_or_default())
    }
}
