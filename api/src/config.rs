use std::env;
use std::time::Duration;

use crate::app::feed_config::{DEFAULT_CACHE_TTL_SECS, DEFAULT_FEED_BASE_URL};

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the USGS summary feeds (without the `all_*.geojson` file)
    pub feed_base_url: String,
    /// How long a fetched feed stays fresh in the cache
    pub cache_ttl: Duration,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            feed_base_url: env::var("FEED_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_FEED_BASE_URL.to_string()),
            cache_ttl: Duration::from_secs(parse_or_default(
                "CACHE_TTL_SECS",
                env::var("CACHE_TTL_SECS").ok(),
                DEFAULT_CACHE_TTL_SECS,
            )),
            port: parse_or_default("PORT", env::var("PORT").ok(), 8080),
        }
    }
}

fn parse_or_default<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{}={:?} is not valid, using {}", name, value, default);
            default
        }),
    }
}
