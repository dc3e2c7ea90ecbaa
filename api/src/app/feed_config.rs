//! Feed configuration constants
//!
//! Defaults for the feed client, the cache and the dashboard filters.

use chrono_tz::Tz;

/// Base URL of the USGS GeoJSON summary feeds
pub const DEFAULT_FEED_BASE_URL: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// Seconds a fetched feed stays fresh in the cache
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Upper bound on a single feed request
pub const FETCH_TIMEOUT_SECS: u64 = 20;

/// Rows returned when the caller does not ask for a count
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Largest row count a caller may ask for
pub const MAX_RESULTS_LIMIT: usize = 100;

/// Magnitude floor when the caller does not pick one
pub const DEFAULT_MIN_MAGNITUDE: f64 = 2.5;

/// Timezone event times are shown in
pub const DISPLAY_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;
