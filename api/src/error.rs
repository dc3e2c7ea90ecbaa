//! Unified error types for the Earthquake Tracker API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Validation and other pure business logic errors
//! - `FeedError`: Earthquake feed client errors (fetch and parse)
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Earthquake feed client errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network failure or timeout before a response arrived
    #[error("Request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The feed answered with a non-2xx status
    #[error("Feed returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The body was not a GeoJSON feature collection
    #[error("Malformed feed payload: {0}")]
    Parse(String),
}

impl FeedError {
    pub fn is_parse(&self) -> bool {
        matches!(self, FeedError::Parse(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FeedError::Fetch(e) if e.is_timeout())
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::InvalidParameter(msg)) => (
                StatusCode::BAD_REQUEST,
                "Invalid parameter",
                Some(msg.clone()),
            ),
            AppError::Feed(e) => {
                tracing::error!("Feed error: {}", e);
                let error = if e.is_parse() {
                    "Feed payload malformed"
                } else {
                    "Feed unavailable"
                };
                let status = if e.is_timeout() {
                    StatusCode::GATEWAY_TIMEOUT
                } else {
                    StatusCode::BAD_GATEWAY
                };
                (status, error, Some(e.to_string()))
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
