//! Health probe endpoints

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};
use super::AppState;

/// Liveness probe with build metadata
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": state.settings.app.version,
        "environment": state.settings.app.environment,
    }))
}

/// Readiness probe covering the session backend; 503 when any check fails
pub async fn detailed_health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let health = state.services.health_check().await;
    let settings = &state.settings;

    let checks = json!({
        "api": {
            "status": "healthy",
            "version": settings.app.version,
            "environment": settings.app.environment,
        },
        "redis": {
            "status": if health.backend_healthy { "healthy" } else { "unhealthy" },
            "backend": health.backend,
            "error": health.backend_error,
            "host": settings.redis.host,
            "port": settings.redis.port,
        }
    });

    let (status_code, status) = if health.is_healthy() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        status_code,
        Json(json!({
            "status": status,
            "timestamp": Utc::now().to_rfc3339(),
            "checks": checks,
        })),
    )
}
