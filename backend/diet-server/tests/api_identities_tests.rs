//! Integration tests for identity API handlers

mod common;

use crate::common::{create_test_app, issued_token, register, send};

use axum::http::{StatusCode, header};
use serde_json::json;

#[tokio::test]
async fn test_create_identity_issues_session_cookie() {
    let app = create_test_app().await;

    let response = send(
        &app,
        "POST",
        "/user",
        None,
        Some(json!({
            "name": "Caio",
            "email": "caio@example.com",
            "imgUrl": "https://example.com/caio.png"
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json["email"], "caio@example.com");
    assert_eq!(response.json["imgUrl"], "https://example.com/caio.png");
    assert!(response.json.get("session_token").is_none());

    let cookie = response.headers[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.contains("Max-Age=604800"));
    assert!(cookie.contains("HttpOnly"));
    assert!(issued_token(&response.headers).is_some());
}

#[tokio::test]
async fn test_create_identity_with_unbound_cookie_adopts_it() {
    let app = create_test_app().await;

    let response = send(
        &app,
        "POST",
        "/user",
        Some("carried-over-token"),
        Some(json!({ "name": "Caio", "email": "caio@example.com" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.headers.get(header::SET_COOKIE).is_none());

    let meals = send(&app, "GET", "/meal", Some("carried-over-token"), None).await;
    assert_eq!(meals.status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_identity_with_bound_cookie_is_duplicate() {
    let app = create_test_app().await;
    let token = register(&app, "a@example.com").await;

    let response = send(
        &app,
        "POST",
        "/user",
        Some(&token),
        Some(json!({ "name": "Other", "email": "b@example.com" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["error"]["code"], "DUPLICATE_IDENTITY");
}

#[tokio::test]
async fn test_duplicate_email_rejected_and_no_second_identity() {
    let app = create_test_app().await;
    register(&app, "caio@example.com").await;

    let response = send(
        &app,
        "POST",
        "/user",
        None,
        Some(json!({ "name": "Caio again", "email": "caio@example.com" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["error"]["code"], "DUPLICATE_IDENTITY");
    assert!(response.headers.get(header::SET_COOKIE).is_none());

    let users = send(&app, "GET", "/user", None, None).await;
    assert_eq!(users.json["users"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_identity_rejects_invalid_email() {
    let app = create_test_app().await;

    let response = send(
        &app,
        "POST",
        "/user",
        None,
        Some(json!({ "name": "Caio", "email": "not-an-email" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(response.json["error"]["field"], "email");
}

#[tokio::test]
async fn test_create_identity_rejects_missing_name() {
    let app = create_test_app().await;

    let response = send(
        &app,
        "POST",
        "/user",
        None,
        Some(json!({ "email": "caio@example.com" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["error"]["field"], "name");
}

#[tokio::test]
async fn test_list_identities_returns_all_without_tokens() {
    let app = create_test_app().await;
    register(&app, "a@example.com").await;
    register(&app, "b@example.com").await;

    let response = send(&app, "GET", "/user", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.json["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("session_token").is_none()));
}
