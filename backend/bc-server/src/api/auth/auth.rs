//! Registration and login handlers

use crate::{
    ApiError, ApiResult, AppState, JsonBody, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest,
};

use bc_identity::{DirectoryError, Registration};

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;

/// POST /register
///
/// Create an employee account
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    if req.username.trim().is_empty() {
        return Err(ApiError::validation("username is required", "username"));
    }
    if req.password.is_empty() {
        return Err(ApiError::validation("password is required", "password"));
    }

    state
        .accounts
        .register(Registration {
            email: req.email,
            username: req.username,
            password: req.password,
            department: req.department,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Employee Registered Successfully")),
    ))
}

/// POST /login
///
/// Both failure modes answer 400 with a fixed message
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let result = state
        .accounts
        .login(&req.username, &req.password)
        .await
        .map_err(|e| match e {
            DirectoryError::UserNotFound { .. } => ApiError::BadRequest {
                message: "User not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::from(other),
        })?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: result.token,
        role: result.role,
    }))
}
