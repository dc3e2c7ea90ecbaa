//! Earthquake Tracker API
//!
//! Fetches recent earthquakes from the USGS GeoJSON feeds, filters them and
//! serves table rows and map points to the dashboard.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod render;

#[cfg(test)]
mod test_utils;


use adapters::UsgsFeedClient;
use app::feed_config::FETCH_TIMEOUT_SECS;
use app::EarthquakeService;
use config::Config;
use domain::ports::SystemClock;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub earthquake_service: Arc<EarthquakeService<UsgsFeedClient, SystemClock>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let feed = Arc::new(
        UsgsFeedClient::new(
            config.feed_base_url.clone(),
            Duration::from_secs(FETCH_TIMEOUT_SECS),
        )
        .context("Failed to build HTTP client")?,
    );

    let earthquake_service = Arc::new(EarthquakeService::new(
        feed,
        Arc::new(SystemClock),
        config.cache_ttl,
    ));

    Ok(AppState { earthquake_service })
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/earthquakes", get(handlers::search_earthquakes))
        .route("/earthquakes/raw", get(handlers::raw_earthquakes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,quake_tracker_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Earthquake Tracker API...");

    let config = Config::from_env();
    tracing::info!(
        "Feed base URL {}, cache TTL {:?}",
        config.feed_base_url,
        config.cache_ttl
    );

    let app = build_router(build_state(&config)?);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
