use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};

use crate::errors::ModelError;
use crate::store::Store;

/// Insert the caller-supplied document as-is. Nothing deduplicates here:
/// registering the same email twice creates two distinct documents.
pub async fn insert(store: &Store, user: Document) -> Result<Bson, ModelError> {
    let result = store.users.insert_one(user).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(result.inserted_id)
}

pub async fn list_all(store: &Store) -> Result<Vec<Document>, ModelError> {
    let cursor = store.users.find(doc! {}).await.map_err(|e| ModelError::Db(e.to_string()))?;
    cursor.try_collect().await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find_by_id(store: &Store, id: ObjectId) -> Result<Option<Document>, ModelError> {
    store.users.find_one(doc! { "_id": id }).await.map_err(|e| ModelError::Db(e.to_string()))
}
