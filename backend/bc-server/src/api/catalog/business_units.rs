use crate::api::catalog::catalog_ops;
use crate::{
    ApiResult, AppState, CreateBusinessUnitRequest, JsonBody, MessageResponse,
    UpdateBusinessUnitRequest,
};

use bc_core::BusinessUnit;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

/// POST /business-units
pub async fn create_business_unit(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateBusinessUnitRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let created = catalog_ops::create(&state, &BusinessUnit::from(req)).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Business Unit Created", "businessUnit": created })),
    ))
}

/// PUT /business-units/{name}
pub async fn update_business_unit(
    State(state): State<AppState>,
    Path(name): Path<String>,
    JsonBody(req): JsonBody<UpdateBusinessUnitRequest>,
) -> ApiResult<Json<Value>> {
    let updated = catalog_ops::update::<BusinessUnit, _>(&state, &name, &req).await?;

    Ok(Json(
        json!({ "message": "Business unit updated", "businessUnit": updated }),
    ))
}

/// DELETE /business-units/{name}
pub async fn delete_business_unit(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    catalog_ops::delete::<BusinessUnit>(&state, &name).await?;
    Ok(Json(MessageResponse::new(
        "Business unit deleted successfully",
    )))
}
