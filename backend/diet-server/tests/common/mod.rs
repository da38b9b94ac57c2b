#![allow(dead_code)]

//! Test infrastructure for diet-server API tests

use diet_auth::SessionCookie;
use diet_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// AppState over a fresh in-memory SQLite database
pub async fn create_test_app_state() -> AppState {
    let pool = diet_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::sqlite(pool, SessionCookie::default())
}

pub async fn create_test_app() -> Router {
    build_router(create_test_app_state().await)
}

/// Router over the in-memory stores, no database
pub fn create_in_memory_test_app() -> Router {
    build_router(AppState::in_memory(SessionCookie::default()))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

/// Send one request. `session` is the raw token, sent as the session cookie.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    session: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = session {
        builder = builder.header(header::COOKIE, format!("sessionId={}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        json,
    }
}

/// Token value carried by a `Set-Cookie: sessionId=...` header
pub fn issued_token(headers: &HeaderMap) -> Option<String> {
    let cookie = headers.get(header::SET_COOKIE)?.to_str().ok()?;
    let pair = cookie.split(';').next()?;
    pair.strip_prefix("sessionId=").map(str::to_string)
}

/// Create an identity and return its session token
pub async fn register(app: &Router, email: &str) -> String {
    let response = send(
        app,
        "POST",
        "/user",
        None,
        Some(json!({ "name": "Caio", "email": email })),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    issued_token(&response.headers).expect("Set-Cookie with session token")
}

pub fn meal_body(name: &str, is_on_diet: bool, date: &str) -> Value {
    json!({
        "name": name,
        "description": "Ovo com pao",
        "is_on_diet": is_on_diet,
        "date": date,
    })
}

/// Create a meal and return its id
pub async fn create_meal(
    app: &Router,
    token: &str,
    name: &str,
    is_on_diet: bool,
    date: &str,
) -> String {
    let response = send(
        app,
        "POST",
        "/meal",
        Some(token),
        Some(meal_body(name, is_on_diet, date)),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    response.json["meal"]["id"].as_str().unwrap().to_string()
}
