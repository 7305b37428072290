//! Department REST API handlers
//!
//! Listing is public. Creation and membership changes need an admin session.

use crate::{
    AdminSession, ApiError, ApiResult, AppState, CreateDepartmentRequest, DepartmentResponse,
    JsonBody, MembershipRequest,
};

use bc_core::DepartmentRoster;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /departments
pub async fn create_department(
    State(state): State<AppState>,
    _admin: AdminSession,
    JsonBody(req): JsonBody<CreateDepartmentRequest>,
) -> ApiResult<(StatusCode, Json<DepartmentResponse>)> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("name is required", "name"));
    }

    let department = state.departments.create(name, req.employee_ids).await?;

    Ok((
        StatusCode::CREATED,
        Json(DepartmentResponse {
            message: "Department Created".to_string(),
            department,
        }),
    ))
}

/// GET /departments
///
/// Members are resolved to `{username, email}`
pub async fn list_departments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentRoster>>> {
    let rosters = state.departments.list().await?;
    Ok(Json(rosters))
}

/// PUT /departments/{name}/add-employee
pub async fn add_employee(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(name): Path<String>,
    JsonBody(req): JsonBody<MembershipRequest>,
) -> ApiResult<Json<DepartmentResponse>> {
    let department = state
        .departments
        .add_employee(&name, &req.username)
        .await?;

    Ok(Json(DepartmentResponse {
        message: format!(
            "Employee {} added to department {}",
            req.username, department.name
        ),
        department,
    }))
}

/// PUT /departments/{name}/remove-employee
pub async fn remove_employee(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(name): Path<String>,
    JsonBody(req): JsonBody<MembershipRequest>,
) -> ApiResult<Json<DepartmentResponse>> {
    let department = state
        .departments
        .remove_employee(&name, &req.username)
        .await?;

    Ok(Json(DepartmentResponse {
        message: format!(
            "Employee {} removed from department {}",
            req.username, department.name
        ),
        department,
    }))
}
