use axum::extract::{Path, State};
use axum::Json;
use mongodb::bson::Document;
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;
use service::catalog_service;

pub async fn list_services(State(state): State<ServerState>) -> Result<Json<Vec<Document>>, ApiError> {
    let services = catalog_service::list_services(&state.store).await?;
    info!(count = services.len(), "list services");
    Ok(Json(services))
}

/// A missing service is still a 200; the body is JSON `null`.
pub async fn get_service(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, ApiError> {
    let service = catalog_service::get_service(&state.store, &id).await?;
    Ok(Json(service))
}
