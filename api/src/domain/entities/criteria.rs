//! Filter criteria and result set
//!
//! Request-scoped values describing what the user asked for and what they get back.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::EarthquakeEvent;
use crate::error::DomainError;

/// The time windows the feed publishes (`days_back`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum FeedWindow {
    Day,
    Week,
    Month,
}

impl FeedWindow {
    pub fn days(self) -> u32 {
        match self {
            FeedWindow::Day => 1,
            FeedWindow::Week => 7,
            FeedWindow::Month => 30,
        }
    }

    pub fn span(self) -> Duration {
        Duration::days(i64::from(self.days()))
    }

    /// Name used in feed file names (`all_{slug}.geojson`)
    pub fn slug(self) -> &'static str {
        match self {
            FeedWindow::Day => "day",
            FeedWindow::Week => "week",
            FeedWindow::Month => "month",
        }
    }
}

impl TryFrom<u32> for FeedWindow {
    type Error = DomainError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            1 => Ok(FeedWindow::Day),
            7 => Ok(FeedWindow::Week),
            30 => Ok(FeedWindow::Month),
            other => Err(DomainError::InvalidParameter(format!(
                "days_back must be one of 1, 7 or 30 (got {})",
                other
            ))),
        }
    }
}

impl From<FeedWindow> for u32 {
    fn from(window: FeedWindow) -> Self {
        window.days()
    }
}

impl std::fmt::Display for FeedWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.days())
    }
}

/// What the user asked to see
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_magnitude: f64,
    pub days_back: FeedWindow,
    /// Case-insensitive substring matched against `place`
    pub location_keyword: Option<String>,
    pub max_results: usize,
    /// Events older than this are dropped
    pub not_before: Option<DateTime<Utc>>,
}

impl FilterCriteria {
    pub fn new(min_magnitude: f64, days_back: FeedWindow) -> Self {
        Self {
            min_magnitude,
            days_back,
            location_keyword: None,
            max_results: crate::app::feed_config::DEFAULT_MAX_RESULTS,
            not_before: None,
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.location_keyword = Some(keyword.into());
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_not_before(mut self, not_before: DateTime<Utc>) -> Self {
        self.not_before = Some(not_before);
        self
    }

    /// Trimmed, lowercased keyword; `None` when unset or blank.
    pub fn normalized_keyword(&self) -> Option<String> {
        self.location_keyword
            .as_deref()
            .map(str::trim)
            .filter(|kw| !kw.is_empty())
            .map(str::to_lowercase)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.min_magnitude.is_finite() || self.min_magnitude < 0.0 {
            return Err(DomainError::InvalidParameter(format!(
                "min_magnitude must be a non-negative number (got {})",
                self.min_magnitude
            )));
        }
        let cap = crate::app::feed_config::MAX_RESULTS_LIMIT;
        if self.max_results > cap {
            return Err(DomainError::InvalidParameter(format!(
                "max_results must be at most {} (got {})",
                cap, self.max_results
            )));
        }
        Ok(())
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(
            crate::app::feed_config::DEFAULT_MIN_MAGNITUDE,
            FeedWindow::Month,
        )
    }
}

/// Filtered events, most recent first, never longer than the requested count
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<EarthquakeEvent>);

impl ResultSet {
    pub(crate) fn from_sorted(events: Vec<EarthquakeEvent>) -> Self {
        Self(events)
    }
}

impl std::ops::Deref for ResultSet {
    type Target = [EarthquakeEvent];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a EarthquakeEvent;
    type IntoIter = std::slice::Iter<'a, EarthquakeEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
