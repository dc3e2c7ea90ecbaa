//! Earthquake service
//!
//! The two entry points the dashboard calls: the filtered result set for a set
//! of criteria, and the raw feed for a window. Feed fetches go through the
//! TTL cache.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use super::feed_cache::FeedCache;
use super::filter;
use super::presentation::{map_points, table_rows, MapPoint, TableRow, NO_COORDINATES_NOTICE};
use crate::domain::entities::{EarthquakeEvent, FeedWindow, FilterCriteria, ResultSet};
use crate::domain::ports::{Clock, FeedSource};
use crate::error::AppError;

/// Everything the dashboard needs for one interaction
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Criteria as applied, including the resolved time cutoff
    pub criteria: FilterCriteria,
    /// Events in the feed before filtering
    pub fetched: usize,
    /// Events passing the filters before the `max_results` cut
    pub matched: usize,
    pub events: ResultSet,
    pub rows: Vec<TableRow>,
    pub map_points: Vec<MapPoint>,
    /// Set when there are rows but none of them can go on the map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_notice: Option<&'static str>,
}

impl SearchResult {
    fn new(criteria: FilterCriteria, fetched: usize, matched: usize, events: ResultSet) -> Self {
        let rows = table_rows(&events);
        let map_points = map_points(&events);
        let map_notice =
            (!rows.is_empty() && map_points.is_empty()).then_some(NO_COORDINATES_NOTICE);
        Self {
            criteria,
            fetched,
            matched,
            events,
            rows,
            map_points,
            map_notice,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Service for fetching and filtering earthquake events
pub struct EarthquakeService<F, C>
where
    F: FeedSource,
    C: Clock,
{
    feed: Arc<F>,
    clock: Arc<C>,
    cache: FeedCache<C>,
}

impl<F, C> EarthquakeService<F, C>
where
    F: FeedSource,
    C: Clock,
{
    pub fn new(feed: Arc<F>, clock: Arc<C>, cache_ttl: Duration) -> Self {
        Self {
            feed,
            cache: FeedCache::new(clock.clone(), cache_ttl),
            clock,
        }
    }

    /// Events for `days_back` days, which must be 1, 7 or 30.
    pub async fn fetch(&self, days_back: u32) -> Result<Arc<[EarthquakeEvent]>, AppError> {
        let window = FeedWindow::try_from(days_back)?;
        self.raw_events(window).await
    }

    /// Unfiltered feed for `window`, served from cache while fresh.
    pub async fn raw_events(&self, window: FeedWindow) -> Result<Arc<[EarthquakeEvent]>, AppError> {
        if let Some(events) = self.cache.get(window) {
            tracing::debug!("Cache hit for window {} ({} events)", window, events.len());
            return Ok(events);
        }

        tracing::debug!("Cache miss for window {}, fetching feed", window);
        let events = self.feed.fetch(window).await.map_err(|e| {
            tracing::warn!("Feed fetch for window {} failed: {}", window, e);
            e
        })?;

        Ok(self.cache.insert(window, events))
    }

    /// Filtered, newest-first events for `criteria`.
    ///
    /// When the criteria carry no cutoff, events older than `days_back` days
    /// from now are dropped.
    pub async fn search(&self, mut criteria: FilterCriteria) -> Result<SearchResult, AppError> {
        criteria.validate()?;

        if criteria.not_before.is_none() {
            let cutoff = self.clock.now() - criteria.days_back.span();
            criteria = criteria.with_not_before(cutoff);
        }

        let events = self.raw_events(criteria.days_back).await?;
        let matched = filter::count_matching(&events, &criteria);
        let results = filter::apply(&events, &criteria);

        tracing::debug!(
            "Search over {} events for window {} matched {}, returning {}",
            events.len(),
            criteria.days_back,
            matched,
            results.len()
        );

        Ok(SearchResult::new(criteria, events.len(), matched, results))
    }

    #[cfg(test)]
    pub fn cache(&self) -> &FeedCache<C> {
        &self.cache
    }
}
