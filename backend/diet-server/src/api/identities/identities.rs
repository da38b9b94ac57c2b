//! Identity REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CallerSession, CreateIdentityRequest, IdentityDto,
    IdentityListResponse, ValidatedJson,
};

use std::panic::Location;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;

/// POST /user
///
/// Create an identity bound to the caller's session. A caller without a
/// session cookie gets a freshly minted one via `Set-Cookie`.
pub async fn create_identity(
    State(state): State<AppState>,
    CallerSession(token): CallerSession,
    ValidatedJson(req): ValidatedJson<CreateIdentityRequest>,
) -> ApiResult<Response> {
    let registration = state.resolver.register(token, req.into()).await?;

    let mut headers = HeaderMap::new();
    if let Some(issued) = registration.issued_token.as_ref() {
        let cookie = state.session_cookie.issue(issued);
        let value = HeaderValue::from_str(&cookie)
            .map_err(|e| ApiError::Internal {
                message: format!("Unencodable session cookie: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        headers.insert(SET_COOKIE, value);
    }

    let body = IdentityDto::from(registration.identity);
    Ok((StatusCode::CREATED, headers, Json(body)).into_response())
}

/// GET /user
///
/// Every identity, oldest first
pub async fn list_identities(
    State(state): State<AppState>,
) -> ApiResult<Json<IdentityListResponse>> {
    let identities = state.identities.list_all().await?;

    Ok(Json(IdentityListResponse {
        users: identities.into_iter().map(IdentityDto::from).collect(),
    }))
}
