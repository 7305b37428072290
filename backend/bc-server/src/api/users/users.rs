use crate::api::spreadsheet::{self, Cell, Column};
use crate::{AdminSession, ApiResult, AppState};

use bc_core::UserSummary;

use axum::{Json, extract::State, response::Response};

const USER_COLUMNS: [Column; 4] = [
    Column { header: "Username", width: 20.0 },
    Column { header: "Email", width: 30.0 },
    Column { header: "Role", width: 15.0 },
    Column { header: "Department", width: 20.0 },
];

/// GET /users
///
/// Every account without credentials. Admin only.
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> ApiResult<Json<Vec<UserSummary>>> {
    let users = state.accounts.list_users().await?;
    Ok(Json(users))
}

/// GET /export-users
///
/// The same listing as an xlsx download. Admin only.
pub async fn export_users(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> ApiResult<Response> {
    let rows: Vec<Vec<Cell>> = state
        .accounts
        .list_users()
        .await?
        .into_iter()
        .map(|user| {
            vec![
                Cell::Text(user.username),
                Cell::Text(user.email),
                Cell::Text(user.role.as_str().to_string()),
                Cell::from(user.department),
            ]
        })
        .collect();

    let bytes = spreadsheet::render("Users", &USER_COLUMNS, &rows)?;

    log::info!("Exported {} user(s)", rows.len());
    Ok(spreadsheet::attachment("Users.xlsx", bytes))
}
