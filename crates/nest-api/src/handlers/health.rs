//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use nest_service::dto::HealthResponse;

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Readiness check with database health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = state
        .service_context()
        .pool()
        .acquire()
        .await
        .map(|_| true)
        .unwrap_or(false);

    if db_healthy {
        (StatusCode::OK, Json(HealthResponse::ok()))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse { status: "degraded" }),
        )
    }
}
