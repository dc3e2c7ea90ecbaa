//! GeoJSON decoding for the USGS summary feeds
//!
//! The payload is a FeatureCollection. Each feature is decoded on its own so a
//! single bad record only drops that record.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{EarthquakeEvent, EventId};
use crate::error::FeedError;

#[derive(Debug, Deserialize)]
struct Feature {
    id: Option<String>,
    #[serde(default)]
    properties: Option<Properties>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    mag: Option<f64>,
    place: Option<String>,
    /// Epoch milliseconds
    time: Option<i64>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// `[longitude, latitude, depth_km]`
    #[serde(default)]
    coordinates: Vec<Option<f64>>,
}

/// Decode a feed body into events, keeping feed order.
pub fn parse_feature_collection(body: &str) -> Result<Vec<EarthquakeEvent>, FeedError> {
    let root: Value = serde_json::from_str(body).map_err(|e| FeedError::Parse(e.to_string()))?;

    let Value::Object(mut root) = root else {
        return Err(FeedError::Parse(
            "expected a GeoJSON FeatureCollection object".to_string(),
        ));
    };

    let features = match root.remove("features") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(features)) => features,
        Some(_) => {
            return Err(FeedError::Parse(
                "`features` is not an array".to_string(),
            ))
        }
    };

    let total = features.len();
    let events: Vec<EarthquakeEvent> = features
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match decode_feature(raw) {
            Ok(event) => Some(event),
            Err(reason) => {
                tracing::debug!("Skipping feature #{}: {}", index, reason);
                None
            }
        })
        .collect();

    if events.len() < total {
        tracing::debug!("Skipped {} of {} features", total - events.len(), total);
    }

    Ok(events)
}

fn decode_feature(raw: Value) -> Result<EarthquakeEvent, String> {
    let feature: Feature = serde_json::from_value(raw).map_err(|e| e.to_string())?;

    let id = feature
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| "missing id".to_string())?;

    let geometry = feature
        .geometry
        .ok_or_else(|| format!("{}: missing geometry", id))?;
    let (longitude, latitude, depth_km) = match geometry.coordinates.as_slice() {
        [Some(lon), Some(lat), Some(depth), ..] => (*lon, *lat, *depth),
        _ => return Err(format!("{}: incomplete coordinates", id)),
    };

    let properties = feature.properties.unwrap_or_default();
    let time = properties
        .time
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .ok_or_else(|| format!("{}: missing or invalid time", id))?;

    Ok(EarthquakeEvent {
        id: EventId(id),
        time,
        latitude,
        longitude,
        depth_km,
        magnitude: properties.mag,
        place: properties.place,
        url: properties.url,
    })
}
