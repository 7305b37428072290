use crate::ApiError;

use bc_auth::AuthError;
use bc_db::DbError;
use bc_identity::DirectoryError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn status_and_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = status_and_json(ApiError::not_found("Vendor not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Vendor not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) =
        status_and_json(ApiError::validation("username is required", "username")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn test_expired_token_returns_401() {
    let error = ApiError::from(AuthError::Expired { location: here() });

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "unauthorized");
}

#[tokio::test]
async fn test_database_error_hides_details() {
    let error = ApiError::from(DbError::Migration {
        message: "table users has no column secret_sauce".to_string(),
        location: here(),
    });

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[tokio::test]
async fn test_duplicate_username_returns_409() {
    let error = ApiError::from(DirectoryError::DuplicateUsername {
        username: "alice".to_string(),
        location: here(),
    });

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_already_member_returns_400() {
    let error = ApiError::from(DirectoryError::AlreadyMember {
        department: "Finance".to_string(),
        username: "alice".to_string(),
        location: here(),
    });

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "Employee already in this department");
}

#[tokio::test]
async fn test_not_a_member_returns_404() {
    let error = ApiError::from(DirectoryError::NotAMember {
        department: "Finance".to_string(),
        username: "alice".to_string(),
        location: here(),
    });

    let (status, _) = status_and_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let error = ApiError::Forbidden {
        message: "admin role required".to_string(),
        location: here(),
    };

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}
