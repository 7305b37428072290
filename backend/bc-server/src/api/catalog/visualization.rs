use crate::api::catalog::catalog_ops;
use crate::{AdminSession, ApiResult, AppState};

use bc_core::{BusinessUnit, SubFunction, Vendor};

use axum::{Json, extract::State};
use serde_json::{Value, json};

/// GET /database-visualization
///
/// All business units, vendors and sub-functions in one payload
pub async fn database_visualization(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let business_units = catalog_ops::repository::<BusinessUnit>(&state)
        .find_all()
        .await?;
    let vendors = catalog_ops::repository::<Vendor>(&state).find_all().await?;
    let subfunctions = catalog_ops::repository::<SubFunction>(&state)
        .find_all()
        .await?;

    Ok(Json(json!({
        "businessUnits": business_units,
        "vendors": vendors,
        "subfunctions": subfunctions,
    })))
}

/// GET /admin-visualization
///
/// Accounts and department rosters. Admin only.
pub async fn admin_visualization(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> ApiResult<Json<Value>> {
    let users = state.accounts.list_users().await?;
    let departments = state.departments.list().await?;

    Ok(Json(json!({ "users": users, "departments": departments })))
}
