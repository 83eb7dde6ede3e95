//! Services catalog. Seeded out-of-band; this system only reads it, so
//! documents stay raw to round-trip whatever shape the seed carries.

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::errors::ModelError;
use crate::store::Store;

pub async fn list_all(store: &Store) -> Result<Vec<Document>, ModelError> {
    let cursor = store.services.find(doc! {}).await.map_err(|e| ModelError::Db(e.to_string()))?;
    cursor.try_collect().await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Fetch one service projected to the booking-page summary fields.
pub async fn find_summary_by_id(store: &Store, id: ObjectId) -> Result<Option<Document>, ModelError> {
    store
        .services
        .find_one(doc! { "_id": id })
        .projection(doc! { "title": 1, "price": 1, "service_id": 1 })
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
