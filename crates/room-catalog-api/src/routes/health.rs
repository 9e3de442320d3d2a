//! Liveness probe, mounted at the root regardless of the configured base path.

use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::{debug, instrument};

/// Body of GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: &'static str,
    /// Crate name of the running binary.
    pub service: &'static str,
    /// Crate version of the running binary.
    pub version: &'static str,
}

#[instrument]
async fn health_check() -> Json<HealthResponse> {
    debug!("health check requested");
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Router exposing GET /health.
pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
