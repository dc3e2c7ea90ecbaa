//! USGS feed client implementation

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;

use super::geojson::parse_feature_collection;
use crate::domain::entities::{EarthquakeEvent, FeedWindow};
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Fetches the USGS `all_{day,week,month}.geojson` summary feeds
pub struct UsgsFeedClient {
    http: Client,
    base_url: String,
}

impl UsgsFeedClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("quake-tracker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn feed_url(&self, window: FeedWindow) -> String {
        format!("{}/all_{}.geojson", self.base_url, window.slug())
    }
}

#[async_trait]
impl FeedSource for UsgsFeedClient {
    async fn fetch(&self, window: FeedWindow) -> Result<Vec<EarthquakeEvent>, FeedError> {
        let url = self.feed_url(window);
        let started = Instant::now();

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let events = parse_feature_collection(&body)?;

        tracing::info!(
            "Fetched {} events for window {} in {:?}",
            events.len(),
            window,
            started.elapsed()
        );

        Ok(events)
    }
}
