//! Earthquake domain entity
//!
//! One seismic event as published by the feed. Events are built once at the
//! adapter boundary and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feed-assigned event identifier (e.g. `nc75095651`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId(s.to_string())
    }
}

/// A single earthquake event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeEvent {
    pub id: EventId,
    pub time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub depth_km: f64,
    /// Some feed entries carry no magnitude
    pub magnitude: Option<f64>,
    /// Free-text location, e.g. "5km S of Los Angeles, California"
    pub place: Option<String>,
    /// USGS event page
    pub url: Option<String>,
}

impl EarthquakeEvent {
    /// Null magnitudes never meet a threshold.
    pub fn meets_magnitude(&self, min_magnitude: f64) -> bool {
        self.magnitude.is_some_and(|mag| mag >= min_magnitude)
    }

    /// `needle` must already be lowercased.
    pub fn place_contains(&self, needle: &str) -> bool {
        self.place
            .as_deref()
            .is_some_and(|place| place.to_lowercase().contains(needle))
    }

    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}
