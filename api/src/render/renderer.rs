//! Result renderer
//!
//! Renders search results and raw feeds to a markdown table for clients that
//! do not ask for JSON.

use crate::app::presentation::table_row;
use crate::app::{SearchResult, TableRow};
use crate::domain::entities::EarthquakeEvent;

const EMPTY_HINT: &str =
    "No earthquakes match your filters. Try lowering the magnitude or increasing days back.";

/// Render a search result to markdown
pub fn render_search(result: &SearchResult) -> String {
    let mut buf = String::new();

    buf.push_str("# Earthquake Tracker\n\n");
    buf.push_str(&render_filters(result));
    buf.push_str(&format!(
        "Showing **{}** earthquakes\n\n",
        result.matched
    ));

    if result.is_empty() {
        buf.push_str(&format!("_{}_\n", EMPTY_HINT));
        return buf;
    }

    buf.push_str(&render_table(&result.rows));

    if let Some(notice) = result.map_notice {
        buf.push_str(&format!("\n_{}_\n", notice));
        return buf;
    }

    let hidden = result.rows.len() - result.map_points.len();
    if hidden > 0 {
        buf.push_str(&format!(
            "\n_{} event(s) have no usable coordinates and are not on the map._\n",
            hidden
        ));
    }

    buf
}

/// Render an unfiltered feed in feed order
pub fn render_raw(days_back: u32, events: &[EarthquakeEvent]) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# Raw feed (last {} day(s))\n\n", days_back));
    buf.push_str(&format!("{} events in feed\n\n", events.len()));

    if events.is_empty() {
        buf.push_str("_The feed is empty._\n");
        return buf;
    }

    let rows: Vec<TableRow> = events.iter().map(table_row).collect();
    buf.push_str(&render_table(&rows));
    buf
}

fn render_filters(result: &SearchResult) -> String {
    let criteria = &result.criteria;
    let mut line = format!(
        "Magnitude >= {:.1}, last {} day(s)",
        criteria.min_magnitude,
        criteria.days_back.days()
    );
    if let Some(keyword) = criteria.location_keyword.as_deref().map(str::trim) {
        if !keyword.is_empty() {
            line.push_str(&format!(", place contains \"{}\"", keyword));
        }
    }
    line.push_str(&format!(", up to {} result(s)\n\n", criteria.max_results));
    line
}

fn render_table(rows: &[TableRow]) -> String {
    let mut buf = String::new();
    buf.push_str("| Time | Place | Magnitude |\n");
    buf.push_str("|------|-------|-----------|\n");
    for row in rows {
        buf.push_str(&format!(
            "| {} | {} | {} |\n",
            row.time,
            escape_cell(&row.place),
            row.magnitude
        ));
    }
    buf
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
