//! Feed cache
//!
//! Remembers the last fetch per feed window for a fixed TTL. Expired entries
//! are dropped on read and replaced wholesale on the next insert.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::domain::entities::{EarthquakeEvent, FeedWindow};
use crate::domain::ports::Clock;

struct CacheEntry {
    fetched_at: DateTime<Utc>,
    events: Arc<[EarthquakeEvent]>,
}

impl CacheEntry {
    fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        // A clock that stepped backwards counts as zero age
        let age = (now - self.fetched_at).to_std().unwrap_or_default();
        age < ttl
    }
}

pub struct FeedCache<C: Clock> {
    clock: Arc<C>,
    ttl: Duration,
    entries: Mutex<HashMap<FeedWindow, CacheEntry>>,
}

impl<C: Clock> FeedCache<C> {
    pub fn new(clock: Arc<C>, ttl: Duration) -> Self {
        Self {
            clock,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fresh events for `window`, if any.
    pub fn get(&self, window: FeedWindow) -> Option<Arc<[EarthquakeEvent]>> {
        let now = self.clock.now();
        let mut entries = self.lock();

        match entries.get(&window) {
            Some(entry) if entry.is_fresh(now, self.ttl) => Some(entry.events.clone()),
            Some(_) => {
                tracing::debug!("Cache entry for window {} expired", window);
                entries.remove(&window);
                None
            }
            None => None,
        }
    }

    /// Store a fresh fetch, replacing whatever was there.
    pub fn insert(&self, window: FeedWindow, events: Vec<EarthquakeEvent>) -> Arc<[EarthquakeEvent]> {
        let events: Arc<[EarthquakeEvent]> = events.into();
        let entry = CacheEntry {
            fetched_at: self.clock.now(),
            events: events.clone(),
        };
        self.lock().insert(window, entry);
        events
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<FeedWindow, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
