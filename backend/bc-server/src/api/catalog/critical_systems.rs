//! Critical-system recovery parameters
//!
//! Both update endpoints upsert by system name. Values are persisted as
//! supplied; nothing here derives an RTO.

use crate::api::catalog::catalog_ops;
use crate::api::spreadsheet::{self, Cell, Column};
use crate::{ApiResult, AppState, JsonBody, UpdateCriticalSystemRequest, UpdateRtoRequest};

use bc_core::{CriticalSystem, CriticalSystemReference};

use axum::{Json, extract::State, response::Response};
use serde_json::{Value, json};

async fn upsert(state: &AppState, system: CriticalSystem) -> ApiResult<Value> {
    catalog_ops::require_key(&system.system, "system")?;

    let patch = serde_json::to_value(&system).map_err(bc_db::DbError::from)?;
    let stored = catalog_ops::repository::<CriticalSystem>(state)
        .update(&system.system, &patch, true)
        .await?
        .unwrap_or(patch);

    log::info!("Stored recovery parameters for '{}'", system.system);
    Ok(stored)
}

/// POST /update-critical-system
pub async fn update_critical_system(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateCriticalSystemRequest>,
) -> ApiResult<Json<Value>> {
    upsert(&state, CriticalSystem::from(req)).await?;

    Ok(Json(json!({ "success": true, "message": "RTO Updated!" })))
}

/// PUT /update-rto
pub async fn update_rto(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateRtoRequest>,
) -> ApiResult<Json<Value>> {
    let rto = req.rto;
    upsert(&state, CriticalSystem::from(req)).await?;

    Ok(Json(json!({ "message": "RTO updated successfully!", "rto": rto })))
}

/// GET /get-critical-systems
pub async fn list_critical_systems(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    let systems = catalog_ops::repository::<CriticalSystem>(&state)
        .find_all()
        .await?;
    Ok(Json(systems))
}

const EXPORT_COLUMNS: [Column; 6] = [
    Column { header: "System Name", width: 25.0 },
    Column { header: "Impact of Downtime", width: 40.0 },
    Column { header: "Max Downtime (MAD)", width: 15.0 },
    Column { header: "Recovery Buffer", width: 15.0 },
    Column { header: "Priority", width: 15.0 },
    Column { header: "Calculated RTO", width: 15.0 },
];

/// GET /export-critical-systems
///
/// Stored systems as an xlsx download. Either update path may have written a
/// row, so each column takes whichever of its two field names is present.
/// Impact comes from the reference table when the system is listed there.
pub async fn export_critical_systems(State(state): State<AppState>) -> ApiResult<Response> {
    let reference = CriticalSystemReference::defaults();

    let rows = catalog_ops::repository::<CriticalSystem>(&state)
        .find_all()
        .await?
        .into_iter()
        .map(|document| -> ApiResult<Vec<Cell>> {
            let system: CriticalSystem =
                serde_json::from_value(document).map_err(bc_db::DbError::from)?;
            let impact = reference
                .iter()
                .find(|row| row.system == system.system)
                .map(|row| row.impact.to_string());

            Ok(vec![
                Cell::Text(system.system),
                Cell::from(impact),
                Cell::from(system.mad.or(system.max_downtime)),
                Cell::from(system.buffer.or(system.recovery_buffer)),
                Cell::from(system.priority),
                Cell::from(system.rto.or(system.calculated_rto)),
            ])
        })
        .collect::<ApiResult<Vec<_>>>()?;

    let bytes = spreadsheet::render("Critical Systems", &EXPORT_COLUMNS, &rows)?;

    log::info!("Exported {} critical system(s)", rows.len());
    Ok(spreadsheet::attachment("Critical_Systems_Analysis.xlsx", bytes))
}

/// GET /critical-systems-config
///
/// Fixed reference table
pub async fn critical_systems_config() -> Json<Value> {
    Json(json!({ "criticalSystems": CriticalSystemReference::defaults() }))
}
