use crate::api::catalog::catalog_ops;
use crate::{
    ApiResult, AppState, CreateVendorRequest, JsonBody, MessageResponse, UpdateVendorRequest,
};

use bc_core::Vendor;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

/// POST /vendors
pub async fn create_vendor(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateVendorRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let created = catalog_ops::create(&state, &Vendor::from(req)).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Vendor Created", "vendor": created })),
    ))
}

/// PUT /vendors/{name}
pub async fn update_vendor(
    State(state): State<AppState>,
    Path(name): Path<String>,
    JsonBody(req): JsonBody<UpdateVendorRequest>,
) -> ApiResult<Json<Value>> {
    let updated = catalog_ops::update::<Vendor, _>(&state, &name, &req).await?;

    Ok(Json(json!({ "message": "Vendor updated", "vendor": updated })))
}

/// DELETE /vendors/{name}
pub async fn delete_vendor(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    catalog_ops::delete::<Vendor>(&state, &name).await?;
    Ok(Json(MessageResponse::new("Vendor deleted successfully")))
}
