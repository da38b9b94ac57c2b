use crate::{AppState, CallerSession, CurrentIdentity, ApiError};

use diet_auth::SessionCookie;
use diet_core::{IdentityDraft, SessionToken};

use axum::{body::Body, extract::FromRequestParts, http::Request};

fn parts_with_cookie(cookie: Option<&str>) -> axum::http::request::Parts {
    let mut builder = Request::builder();
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    let (parts, _body) = builder.body(Body::empty()).unwrap().into_parts();
    parts
}

#[tokio::test]
async fn test_caller_session_reads_configured_cookie() {
    let state = AppState::in_memory(SessionCookie::default());
    let mut parts = parts_with_cookie(Some("theme=dark; sessionId=abc"));

    let CallerSession(token) = CallerSession::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(token, Some(SessionToken::from("abc")));
}

#[tokio::test]
async fn test_caller_session_without_cookie_is_none() {
    let state = AppState::in_memory(SessionCookie::default());
    let mut parts = parts_with_cookie(None);

    let CallerSession(token) = CallerSession::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert!(token.is_none());
}

#[tokio::test]
async fn test_current_identity_without_cookie_is_unauthenticated() {
    let state = AppState::in_memory(SessionCookie::default());
    let mut parts = parts_with_cookie(None);

    let result = CurrentIdentity::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn test_current_identity_with_unknown_token_is_not_found() {
    let state = AppState::in_memory(SessionCookie::default());
    let mut parts = parts_with_cookie(Some("sessionId=nobody"));

    let result = CurrentIdentity::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}

#[tokio::test]
async fn test_current_identity_resolves_registered_session() {
    let state = AppState::in_memory(SessionCookie::default());
    let registration = state
        .resolver
        .register(None, IdentityDraft::new("Caio", "caio@example.com", None))
        .await
        .unwrap();
    let token = registration.issued_token.unwrap();
    let mut parts = parts_with_cookie(Some(&format!("sessionId={}", token)));

    let CurrentIdentity(identity) = CurrentIdentity::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(identity.id, registration.identity.id);
}
