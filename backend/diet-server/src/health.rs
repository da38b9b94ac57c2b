use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - status with component detail
pub async fn health_check(State(state): State<AppState>) -> Response {
    let storage = if state.pool.is_some() {
        "sqlite"
    } else {
        "memory"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "storage": storage,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - is the process alive?
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - can we serve traffic? Pings the database when there is one.
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    let Some(pool) = state.pool.as_ref() else {
        return (StatusCode::OK, "Ready").into_response();
    };

    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
        }
    }
}
