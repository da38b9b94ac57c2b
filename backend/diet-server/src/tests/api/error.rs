use crate::ApiError;

use diet_auth::AuthError;
use diet_core::CoreError;
use diet_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("Meal not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Meal not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "name must not be blank".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "boom".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_unauthenticated_auth_error_maps_to_401() {
    let (status, json) = body_json(AuthError::unauthenticated().into()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_identity_not_found_maps_to_404_user_not_found() {
    let (status, json) = body_json(AuthError::identity_not_found().into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_duplicate_identity_maps_to_400() {
    let (status, json) = body_json(AuthError::duplicate("email taken").into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "DUPLICATE_IDENTITY");
}

#[tokio::test]
async fn test_unique_violation_maps_to_duplicate_identity() {
    let (status, json) = body_json(DbError::unique("users.email").into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "DUPLICATE_IDENTITY");
}

#[tokio::test]
async fn test_storage_failure_hides_details() {
    let (status, json) = body_json(DbError::corrupt_row("users.id is not a uuid").into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[tokio::test]
async fn test_core_validation_keeps_field() {
    let (_, json) = body_json(CoreError::field("date", "date is required").into()).await;

    assert_eq!(json["error"]["field"], "date");
    assert_eq!(json["error"]["message"], "date is required");
}

#[tokio::test]
async fn test_uuid_parse_error_is_validation() {
    let error: ApiError = uuid::Uuid::parse_str("not-a-uuid").unwrap_err().into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}
