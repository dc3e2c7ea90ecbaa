//! Event filtering
//!
//! Turns a fetched feed into the result set shown to the user:
//! filter, newest first, truncate. No I/O and no clock access.

use crate::domain::entities::{EarthquakeEvent, FilterCriteria, ResultSet};

/// Apply `criteria` to `events`.
///
/// Events with no magnitude are always dropped. Sorting is stable, so events
/// with equal times keep their feed order.
pub fn apply(events: &[EarthquakeEvent], criteria: &FilterCriteria) -> ResultSet {
    if criteria.max_results == 0 {
        return ResultSet::default();
    }

    let keyword = criteria.normalized_keyword();

    let mut matched: Vec<EarthquakeEvent> = events
        .iter()
        .filter(|event| matches(event, criteria, keyword.as_deref()))
        .cloned()
        .collect();

    matched.sort_by(|a, b| b.time.cmp(&a.time));
    matched.truncate(criteria.max_results);

    ResultSet::from_sorted(matched)
}

/// Number of events `criteria` accepts, ignoring `max_results`.
pub fn count_matching(events: &[EarthquakeEvent], criteria: &FilterCriteria) -> usize {
    let keyword = criteria.normalized_keyword();
    events
        .iter()
        .filter(|event| matches(event, criteria, keyword.as_deref()))
        .count()
}

fn matches(event: &EarthquakeEvent, criteria: &FilterCriteria, keyword: Option<&str>) -> bool {
    if !event.meets_magnitude(criteria.min_magnitude) {
        return false;
    }
    if let Some(keyword) = keyword {
        if !event.place_contains(keyword) {
            return false;
        }
    }
    match criteria.not_before {
        Some(cutoff) => event.time >= cutoff,
        None => true,
    }
}
