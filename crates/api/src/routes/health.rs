//! Health check endpoint.

use axum::{Router, routing::get};
use serde::Serialize;

use crate::{AppState, response::ApiResponse};

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

async fn health_check() -> ApiResponse<HealthResponse> {
    ApiResponse::ok(
        HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
        },
        "OK",
    )
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/healthcheck", get(health_check))
}
