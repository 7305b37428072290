#![allow(dead_code)]

//! Test infrastructure for bc-server API tests

use bc_auth::{CredentialVault, ManualClock, SessionIssuer};
use bc_identity::{BootstrapService, BootstrapSettings};
use bc_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-that-is-at-least-32-bytes";
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = bc_db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to create test database");

    bc_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn cheap_vault() -> CredentialVault {
    CredentialVault::new(64, 1, 1).expect("valid test parameters")
}

pub struct TestApp {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
}

/// AppState over a fresh database with the default administrator seeded
pub async fn create_test_app() -> TestApp {
    let pool = create_test_pool().await;
    let clock = Arc::new(ManualClock::default());
    let issuer = Arc::new(SessionIssuer::with_clock(TEST_SECRET, 3600, clock.clone()));

    BootstrapService::new(pool.clone(), cheap_vault(), BootstrapSettings::default())
        .ensure_admin()
        .await
        .expect("Failed to seed admin");

    TestApp {
        state: AppState::new(pool, cheap_vault(), issuer),
        clock,
    }
}

/// Send one request through a fresh router and decode the JSON reply.
/// Non-JSON bodies come back as a JSON string.
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, json)
}

/// Send a raw body with an explicit content type, decoding the reply like [`send`]
pub async fn send_raw(
    state: &AppState,
    method: &str,
    uri: &str,
    content_type: &str,
    body: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, json)
}

/// GET a binary resource, returning headers and the undecoded body
pub async fn download(
    state: &AppState,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, HeaderMap, Bytes) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let response = build_router(state.clone())
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, bytes)
}

pub async fn register(state: &AppState, username: &str, password: &str) -> StatusCode {
    let (status, _) = send(
        state,
        "POST",
        "/register",
        Some(serde_json::json!({
            "email": format!("{}@example.com", username),
            "username": username,
            "password": password,
        })),
        None,
    )
    .await;
    status
}

/// Log in and return the bearer token
pub async fn login(state: &AppState, username: &str, password: &str) -> String {
    let (status, json) = send(
        state,
        "POST",
        "/login",
        Some(serde_json::json!({ "username": username, "password": password })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {json}");

    json["token"].as_str().unwrap().to_string()
}

pub async fn admin_token(state: &AppState) -> String {
    login(state, ADMIN_USERNAME, ADMIN_PASSWORD).await
}

/// Register an employee and return their token
pub async fn employee_token(state: &AppState, username: &str) -> String {
    assert_eq!(register(state, username, "pw1").await, StatusCode::CREATED);
    login(state, username, "pw1").await
}
