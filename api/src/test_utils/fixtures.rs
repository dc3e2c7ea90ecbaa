//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Event times are offsets from `FIXTURE_NOW_MILLIS`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use chrono::{DateTime, Utc};

use crate::domain::entities::{EarthquakeEvent, EventId};

/// 2023-11-14T22:13:20Z
pub const FIXTURE_NOW_MILLIS: i64 = 1_700_000_000_000;

fn fixture_time(offset_millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(FIXTURE_NOW_MILLIS + offset_millis).unwrap()
}

/// Create a magnitude 3.0 event near San Francisco
pub fn test_event(id: &str, offset_millis: i64) -> EarthquakeEvent {
    EarthquakeEvent {
        id: EventId::from(id),
        time: fixture_time(offset_millis),
        latitude: 37.0,
        longitude: -122.0,
        depth_km: 10.0,
        magnitude: Some(3.0),
        place: Some("Test place".to_string()),
        url: Some(format!(
            "https://earthquake.usgs.gov/earthquakes/eventpage/{}",
            id
        )),
    }
}

/// Create an event with a specific magnitude and place
pub fn test_event_at(id: &str, magnitude: f64, place: &str, offset_millis: i64) -> EarthquakeEvent {
    EarthquakeEvent {
        magnitude: Some(magnitude),
        place: Some(place.to_string()),
        ..test_event(id, offset_millis)
    }
}

/// Create `count` events `e0..e{count-1}`, one minute apart, the last one newest
pub fn test_events(count: usize, magnitude: f64) -> Vec<EarthquakeEvent> {
    (0..count)
        .map(|i| {
            let offset = -((count - i) as i64) * 60_000;
            test_event_at(
                &format!("e{}", i),
                magnitude,
                &format!("Test place {}", i),
                offset,
            )
        })
        .collect()
}

/// One GeoJSON feature as USGS publishes it
pub fn feature_json(id: &str, magnitude: Option<f64>, place: &str, time_millis: i64) -> String {
    serde_json::json!({
        "type": "Feature",
        "id": id,
        "properties": {
            "mag": magnitude,
            "place": place,
            "time": time_millis,
            "url": format!("https://earthquake.usgs.gov/earthquakes/eventpage/{}", id),
        },
        "geometry": {
            "type": "Point",
            "coordinates": [-122.0, 37.0, 8.5],
        },
    })
    .to_string()
}

pub fn feature_collection(features: &[String]) -> String {
    format!(
        r#"{{"type":"FeatureCollection","metadata":{{"count":{}}},"features":[{}]}}"#,
        features.len(),
        features.join(",")
    )
}

/// Serve `body` with `status` at `path`; returns the base URL.
pub async fn serve_static(path: &str, status: StatusCode, body: String) -> String {
    serve_counting(path, status, body).await.0
}

/// Like `serve_static`, also counting requests to `path`.
pub async fn serve_counting(
    path: &str,
    status: StatusCode,
    body: String,
) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        path,
        get(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let body = body.clone();
            async move { (status, body) }
        }),
    );
    (spawn_server(app).await, hits)
}

/// Serve `path` only after `delay`.
pub async fn serve_slow(path: &str, delay: Duration) -> String {
    let app = Router::new().route(
        path,
        get(move || async move {
            tokio::time::sleep(delay).await;
            feature_collection(&[])
        }),
    );
    spawn_server(app).await
}

/// Base URL nothing is listening on.
pub fn unused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
