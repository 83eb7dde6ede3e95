//! Bookings are write-only through this API: the caller's body is stored
//! as-is, with no fixed schema enforced.

use mongodb::bson::{Bson, Document};

use crate::errors::ModelError;
use crate::store::Store;

pub async fn insert(store: &Store, booking: Document) -> Result<Bson, ModelError> {
    let result = store.bookings.insert_one(booking).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(result.inserted_id)
}
