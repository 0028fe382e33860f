use axum::{Json, response::IntoResponse};
use serde::Serialize;

/// Liveness payload, served bare rather than in the `ApiResponse`
/// envelope.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn health_check() -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok",
        message: "Server is running",
    })
}
