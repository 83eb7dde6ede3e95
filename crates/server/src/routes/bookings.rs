use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::state::ServerState;
use service::booking_service;

pub async fn create_booking(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let inserted_id = booking_service::create_booking(&state.store, body).await?;
    Ok(Json(json!({
        "message": "Booking added successfully",
        "result": { "insertedId": inserted_id },
    })))
}
