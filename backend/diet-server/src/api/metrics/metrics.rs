use crate::{ApiResult, AppState, CurrentIdentity, MetricsResponse};

use diet_core::MetricsEngine;

use axum::{Json, extract::State};

/// GET /meal/metrics
///
/// Recomputed from the full history on every call; nothing is cached.
pub async fn get_metrics(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Json<MetricsResponse>> {
    let meals = state.meals.list_all(&identity).await?;
    let report = MetricsEngine::compute(&meals);

    Ok(Json(report.into()))
}
