use mongodb::bson::{to_document, Document};
use serde_json::Value;
use tracing::info;

use crate::errors::ServiceError;
use crate::ids::{inserted_id_json, parse_object_id};
use models::store::Store;

/// Register a user from the caller's body as-is. Duplicate registration is
/// not prevented; posting the same email twice yields two documents.
pub async fn create_user(store: &Store, user: Value) -> Result<Value, ServiceError> {
    if !user.is_object() {
        return Err(ServiceError::Validation("user body must be a JSON object".into()));
    }
    let doc = to_document(&user).map_err(|e| ServiceError::Validation(e.to_string()))?;
    let inserted_id = models::user::insert(store, doc).await?;
    let id_json = inserted_id_json(inserted_id);
    info!(id = %id_json, "user created");
    Ok(id_json)
}

pub async fn list_users(store: &Store) -> Result<Vec<Document>, ServiceError> {
    let users = models::user::list_all(store).await?;
    Ok(users)
}

pub async fn get_user(store: &Store, raw_id: &str) -> Result<Option<Document>, ServiceError> {
    let id = parse_object_id(raw_id)?;
    let user = models::user::find_by_id(store, id).await?;
    Ok(user)
}
