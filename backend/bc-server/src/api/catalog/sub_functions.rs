use crate::api::catalog::catalog_ops;
use crate::{
    ApiResult, AppState, CreateSubFunctionRequest, JsonBody, MessageResponse,
    UpdateSubFunctionRequest,
};

use bc_core::SubFunction;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

/// POST /subfunctions
pub async fn create_sub_function(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateSubFunctionRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let created = catalog_ops::create(&state, &SubFunction::from(req)).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Sub-function Created", "subFunction": created })),
    ))
}

/// PUT /subfunctions/{name}
pub async fn update_sub_function(
    State(state): State<AppState>,
    Path(name): Path<String>,
    JsonBody(req): JsonBody<UpdateSubFunctionRequest>,
) -> ApiResult<Json<Value>> {
    let updated = catalog_ops::update::<SubFunction, _>(&state, &name, &req).await?;

    Ok(Json(
        json!({ "message": "Subfunction updated", "subFunction": updated }),
    ))
}

/// DELETE /subfunctions/{name}
pub async fn delete_sub_function(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    catalog_ops::delete::<SubFunction>(&state, &name).await?;
    Ok(Json(MessageResponse::new("Subfunction deleted successfully")))
}
