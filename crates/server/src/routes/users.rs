use axum::extract::{Path, State};
use axum::Json;
use mongodb::bson::Document;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;
use service::user_service;

pub async fn create_user(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let inserted_id = user_service::create_user(&state.store, body).await?;
    Ok(Json(json!({
        "message": "User added successfully",
        "result": { "insertedId": inserted_id },
    })))
}

pub async fn list_users(State(state): State<ServerState>) -> Result<Json<Vec<Document>>, ApiError> {
    let users = user_service::list_users(&state.store).await?;
    info!(count = users.len(), "list users");
    Ok(Json(users))
}

/// Unknown-but-well-formed ids answer 200 with a `null` body.
pub async fn get_user(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, ApiError> {
    let user = user_service::get_user(&state.store, &id).await?;
    Ok(Json(user))
}
