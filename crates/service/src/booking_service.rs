use mongodb::bson::to_document;
use serde_json::Value;
use tracing::info;

use crate::errors::ServiceError;
use crate::ids::inserted_id_json;
use models::store::Store;

/// Store the caller's booking body as-is. No shape is enforced beyond
/// "must be a JSON object" (the store cannot hold bare scalars).
pub async fn create_booking(store: &Store, booking: Value) -> Result<Value, ServiceError> {
    if !booking.is_object() {
        return Err(ServiceError::Validation("booking body must be a JSON object".into()));
    }
    let doc = to_document(&booking).map_err(|e| ServiceError::Validation(e.to_string()))?;
    let inserted_id = models::booking::insert(store, doc).await?;
    let id_json = inserted_id_json(inserted_id);
    info!(id = %id_json, "booking created");
    Ok(id_json)
}
