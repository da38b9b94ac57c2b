//! Meal REST API handlers
//!
//! Every route requires a session. Reads and deletes are scoped to the
//! caller's meals; updates match on id alone.

use crate::{
    ApiError, ApiResult, AppState, CurrentIdentity, DeleteResponse, MealDto, MealListResponse,
    MealLookupResponse, MealRequest, MealResponse, ValidatedJson,
};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// GET /meal
///
/// The caller's meals, most recent first
pub async fn list_meals(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Json<MealListResponse>> {
    let meals = state.meals.list_all(&identity).await?;

    Ok(Json(MealListResponse {
        meals: meals.into_iter().map(MealDto::from).collect(),
    }))
}

/// GET /meal/{id}
pub async fn get_meal(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<MealLookupResponse>> {
    let meal_id = Uuid::parse_str(&id)?;

    let meal = state.meals.get_one(&identity, meal_id).await?;

    Ok(Json(MealLookupResponse {
        meal: meal.map(MealDto::from),
    }))
}

/// POST /meal
pub async fn create_meal(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    ValidatedJson(req): ValidatedJson<MealRequest>,
) -> ApiResult<(StatusCode, Json<MealResponse>)> {
    let draft = req.into_draft()?;

    let meal = state.meals.create(&identity, draft).await?;
    log::debug!("Meal {} recorded for {}", meal.id, identity.id);

    Ok((StatusCode::CREATED, Json(MealResponse { meal: meal.into() })))
}

/// PUT /meal/{id}
///
/// Full replace. Any authenticated caller may update any meal by id.
pub async fn update_meal(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<MealRequest>,
) -> ApiResult<(StatusCode, Json<MealResponse>)> {
    let meal_id = Uuid::parse_str(&id)?;
    let draft = req.into_draft()?;

    let meal = state
        .meals
        .update(&identity, meal_id, draft)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Meal {} not found", meal_id)))?;

    if meal.user_id != identity.id {
        log::warn!(
            "Identity {} updated meal {} owned by {}",
            identity.id,
            meal.id,
            meal.user_id
        );
    }

    Ok((StatusCode::CREATED, Json(MealResponse { meal: meal.into() })))
}

/// DELETE /meal/{id}
pub async fn delete_meal(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<DeleteResponse>)> {
    let meal_id = Uuid::parse_str(&id)?;

    if !state.meals.delete(&identity, meal_id).await? {
        return Err(ApiError::not_found(format!("Meal {} not found", meal_id)));
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(DeleteResponse {
            deleted_id: meal_id.to_string(),
        }),
    ))
}
