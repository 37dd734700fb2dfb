//! Health check endpoint
//!
//! Mounted at the root (outside `/api`) by [`crate::create_router`],
//! so orchestrators can probe liveness without the API prefix.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness check - the service holds no external connections
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
