//! Integration tests for registration, login and session enforcement
mod common;

use crate::common::{
    admin_token, create_test_app, employee_token, login, register, send, send_raw,
};

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;

#[tokio::test]
async fn test_register_login_scenario() {
    let app = create_test_app().await;

    // register("a@x.com", "alice", "pw1")
    let (status, json) = send(
        &app.state,
        "POST",
        "/register",
        Some(json!({"email": "a@x.com", "username": "alice", "password": "pw1"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Employee Registered Successfully");

    // login with the right password
    let (status, json) = send(
        &app.state,
        "POST",
        "/login",
        Some(json!({"username": "alice", "password": "pw1"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Login successful");
    assert_eq!(json["role"], "employee");
    assert!(!json["token"].as_str().unwrap().is_empty());

    // wrong password
    let (status, json) = send(
        &app.state,
        "POST",
        "/login",
        Some(json!({"username": "alice", "password": "wrong"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "Invalid credentials");

    // unknown user
    let (status, json) = send(
        &app.state,
        "POST",
        "/login",
        Some(json!({"username": "bob", "password": "pw1"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_register_ignores_supplied_role() {
    let app = create_test_app().await;

    let (status, _) = send(
        &app.state,
        "POST",
        "/register",
        Some(json!({
            "email": "m@x.com",
            "username": "mallory",
            "password": "pw1",
            "role": "admin"
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, json) = send(
        &app.state,
        "POST",
        "/login",
        Some(json!({"username": "mallory", "password": "pw1"})),
        None,
    )
    .await;
    assert_eq!(json["role"], "employee");
}

#[tokio::test]
async fn test_register_duplicate_username_returns_409() {
    let app = create_test_app().await;
    assert_eq!(register(&app.state, "alice", "pw1").await, StatusCode::CREATED);

    let status = register(&app.state, "alice", "pw2").await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_empty_username_returns_400() {
    let app = create_test_app().await;

    let (status, json) = send(
        &app.state,
        "POST",
        "/register",
        Some(json!({"email": "x@x.com", "username": " ", "password": "pw1"})),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn test_bootstrap_admin_logs_in_as_admin() {
    let app = create_test_app().await;

    let (status, json) = send(
        &app.state,
        "POST",
        "/login",
        Some(json!({"username": "admin", "password": "admin123"})),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["role"], "admin");
}

#[tokio::test]
async fn test_list_users_requires_token() {
    let app = create_test_app().await;

    let (status, json) = send(&app.state, "GET", "/users", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_list_users_rejects_garbage_token() {
    let app = create_test_app().await;

    let (status, _) = send(&app.state, "GET", "/users", None, Some("not.a.jwt")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_forbidden_for_employee() {
    let app = create_test_app().await;
    let token = employee_token(&app.state, "alice").await;

    let (status, json) = send(&app.state, "GET", "/users", None, Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_list_users_as_admin_omits_password() {
    let app = create_test_app().await;
    register(&app.state, "alice", "pw1").await;
    let token = admin_token(&app.state).await;

    let (status, json) = send(&app.state, "GET", "/users", None, Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let users = json.as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password_hash").is_none());
        assert!(user.get("password").is_none());
    }
    assert!(users.iter().any(|u| u["username"] == "alice" && u["role"] == "employee"));
}

#[tokio::test]
async fn test_token_rejected_after_one_hour() {
    let app = create_test_app().await;
    let token = admin_token(&app.state).await;

    let (status, _) = send(&app.state, "GET", "/users", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    app.clock.advance(Duration::seconds(3601));

    let (status, json) = send(&app.state, "GET", "/users", None, Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["message"], "unauthorized");
}

#[tokio::test]
async fn test_login_token_is_not_reusable_under_other_scheme() {
    let app = create_test_app().await;
    let token = login(&app.state, "admin", "admin123").await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/users")
        .header("Authorization", format!("Token {}", token))
        .body(axum::body::Body::empty())
        .unwrap();

    use tower::ServiceExt;
    let response = bc_server::build_router(app.state.clone())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_without_email_returns_error_envelope() {
    let app = create_test_app().await;

    let (status, json) = send(
        &app.state,
        "POST",
        "/register",
        Some(json!({"username": "alice", "password": "pw1"})),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert!(json["error"]["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_login_with_malformed_json_returns_error_envelope() {
    let app = create_test_app().await;

    let (status, json) = send_raw(
        &app.state,
        "POST",
        "/login",
        "application/json",
        "{\"username\": ",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_login_without_json_content_type_returns_error_envelope() {
    let app = create_test_app().await;

    let (status, json) = send_raw(
        &app.state,
        "POST",
        "/login",
        "text/plain",
        "username=admin",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]["message"].is_string());
}
