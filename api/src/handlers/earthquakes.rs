//! Earthquake handlers
//!
//! Endpoints the dashboard calls for filtered results and the raw feed.
//! Supports content negotiation: Accept: application/json for JSON, otherwise text/plain.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{EarthquakeEvent, FeedWindow, FilterCriteria};
use crate::error::AppError;
use crate::render::{render_raw, render_search};
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

fn plain_text(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

/// Query string for GET /earthquakes
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub min_magnitude: Option<f64>,
    pub days_back: Option<u32>,
    pub keyword: Option<String>,
    pub max_results: Option<usize>,
}

impl SearchQuery {
    fn into_criteria(self) -> Result<FilterCriteria, AppError> {
        let defaults = FilterCriteria::default();
        let days_back = match self.days_back {
            Some(days) => FeedWindow::try_from(days)?,
            None => defaults.days_back,
        };

        let mut criteria = FilterCriteria::new(
            self.min_magnitude.unwrap_or(defaults.min_magnitude),
            days_back,
        )
        .with_max_results(self.max_results.unwrap_or(defaults.max_results));
        if let Some(keyword) = self.keyword {
            criteria = criteria.with_keyword(keyword);
        }
        Ok(criteria)
    }
}

/// GET /earthquakes
///
/// Filtered, newest-first events with table rows and map points.
/// - Accept: application/json → JSON response
/// - Otherwise → Markdown table
pub async fn search_earthquakes(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let criteria = query.into_criteria()?;

    let result = state.earthquake_service.search(criteria).await?;

    if wants_json(&headers) {
        Ok(Json(result).into_response())
    } else {
        Ok(plain_text(render_search(&result)))
    }
}

/// Query string for GET /earthquakes/raw
#[derive(Debug, Default, Deserialize)]
pub struct RawQuery {
    pub days_back: Option<u32>,
}

/// JSON response for the raw feed
#[derive(Serialize)]
pub struct RawFeedResponse<'a> {
    pub days_back: u32,
    pub count: usize,
    pub events: &'a [EarthquakeEvent],
}

/// GET /earthquakes/raw
///
/// Every parsed event for the window, before any filtering, for diagnostics.
pub async fn raw_earthquakes(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<RawQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let days_back = query
        .days_back
        .unwrap_or_else(|| FilterCriteria::default().days_back.days());

    let events = state.earthquake_service.fetch(days_back).await?;

    if wants_json(&headers) {
        Ok(Json(RawFeedResponse {
            days_back,
            count: events.len(),
            events: &events,
        })
        .into_response())
    } else {
        Ok(plain_text(render_raw(days_back, &events)))
    }
}
