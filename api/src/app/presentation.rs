//! Presentation shaping
//!
//! Converts a result set into the rows and map points the dashboard draws.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use super::feed_config::DISPLAY_TIMEZONE;
use crate::domain::entities::{EarthquakeEvent, ResultSet};

/// Shown instead of a map when no result row has usable coordinates
pub const NO_COORDINATES_NOTICE: &str = "No latitude/longitude available to show on the map.";

/// One row of the results table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub id: String,
    /// Event time in the display timezone
    pub time: String,
    pub place: String,
    /// One decimal, or empty when the feed gave no magnitude
    pub magnitude: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One marker on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
}

pub fn format_magnitude(magnitude: Option<f64>) -> String {
    magnitude.map(|m| format!("{:.1}", m)).unwrap_or_default()
}

pub fn format_time(time: DateTime<Utc>, tz: Tz) -> String {
    time.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

pub fn table_row(event: &EarthquakeEvent) -> TableRow {
    TableRow {
        id: event.id.to_string(),
        time: format_time(event.time, DISPLAY_TIMEZONE),
        place: event.place.clone().unwrap_or_default(),
        magnitude: format_magnitude(event.magnitude),
        url: event.url.clone(),
    }
}

pub fn table_rows(results: &ResultSet) -> Vec<TableRow> {
    results.iter().map(table_row).collect()
}

/// Events without usable coordinates get no marker.
pub fn map_points(results: &ResultSet) -> Vec<MapPoint> {
    results
        .iter()
        .filter(|event| event.has_coordinates())
        .map(|event| MapPoint {
            latitude: event.latitude,
            longitude: event.longitude,
            magnitude: event.magnitude,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::apply;
    use crate::domain::entities::{FeedWindow, FilterCriteria};
    use crate::test_utils::{test_event, test_event_at};

    #[test]
    fn magnitude_has_one_decimal() {
        assert_eq!(format_magnitude(Some(4.5)), "4.5");
        assert_eq!(format_magnitude(Some(3.0)), "3.0");
        assert_eq!(format_magnitude(Some(2.46)), "2.5");
        assert_eq!(format_magnitude(None), "");
    }

    #[test]
    fn time_is_shown_in_pacific_time() {
        // 2023-11-14T22:13:20Z
        let time = DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap();
        assert_eq!(
            format_time(time, DISPLAY_TIMEZONE),
            "2023-11-14 14:13:20 PST"
        );
    }

    #[test]
    fn table_rows_use_pacific_time_not_utc() {
        let row = table_row(&test_event("winter", 0));
        assert_eq!(row.time, "2023-11-14 14:13:20 PST");

        let mut summer = test_event("summer", 0);
        summer.time = DateTime::<Utc>::from_timestamp_millis(1_688_212_800_000).unwrap();
        assert_eq!(table_row(&summer).time, "2023-07-01 05:00:00 PDT");
    }

    #[test]
    fn rows_follow_result_order() {
        let events = vec![
            test_event_at("older", 3.2, "A", 1_000),
            test_event_at("newer", 4.8, "B", 2_000),
        ];
        let results = apply(&events, &FilterCriteria::new(0.0, FeedWindow::Day));

        let rows = table_rows(&results);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "newer");
        assert_eq!(rows[0].magnitude, "4.8");
        assert_eq!(rows[1].place, "A");
    }

    #[test]
    fn map_skips_unusable_coordinates() {
        let mut bad = test_event("bad", 2_000);
        bad.latitude = f64::NAN;
        let good = test_event("good", 1_000);
        let results = apply(&[bad, good], &FilterCriteria::new(0.0, FeedWindow::Day));

        let points = map_points(&results);

        assert_eq!(results.len(), 2);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].latitude, 37.0);
    }
}
