//! Liveness probe.

use axum::Json;

use crate::models::HealthResponse;

/// `GET /health` — always `{"status": "ok"}`.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
