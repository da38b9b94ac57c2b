use crate::{
    AppState, create_identity, create_meal, delete_meal, get_meal, get_metrics, health,
    list_identities, list_meals, request_logging, update_meal,
};

use axum::{Router, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Identities
        .route("/user", get(list_identities).post(create_identity))
        // Meals
        .route("/meal", get(list_meals).post(create_meal))
        .route("/meal/metrics", get(get_metrics))
        .route(
            "/meal/{id}",
            get(get_meal).put(update_meal).delete(delete_meal),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(middleware::from_fn(request_logging::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
