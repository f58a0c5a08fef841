//! Health check handler

use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use serde::Serialize;

/// Health check response data
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Server timestamp in milliseconds
    pub timestamp_ms: u64,
}

/// GET /health
///
/// Liveness probe; exposes no internal detail beyond the server clock.
pub async fn health_check() -> Json<HealthResponse> {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    Json(HealthResponse {
        status: "ok",
        timestamp_ms,
    })
}
