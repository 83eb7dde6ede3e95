use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::state::ServerState;
use models::product::ProductFields;
use service::product_service;

/// Full-field replace-or-insert. The reply is the same fixed text whether
/// the store matched an existing document or created one.
pub async fn upsert_product(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(fields): Json<ProductFields>,
) -> Result<Json<Value>, ApiError> {
    product_service::upsert_product(&state.store, &id, fields).await?;
    Ok(Json(json!({ "message": "Product updated successfully" })))
}
