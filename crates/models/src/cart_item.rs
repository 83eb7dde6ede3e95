use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::store::Store;

/// One cart entry: a product snapshot keyed by the owning user's email.
/// `product` is whatever the storefront sent when the item was added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub product: Bson,
    #[serde(rename = "userEmail")]
    pub user_email: String,
}

/// Duplicate check: whole-value equality on the product plus the email,
/// mirroring how items are keyed at insert time.
pub async fn find_by_product_and_email(
    store: &Store,
    product: &Bson,
    user_email: &str,
) -> Result<Option<CartItem>, ModelError> {
    store
        .cart_items
        .find_one(doc! { "product": product.clone(), "userEmail": user_email })
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn insert(store: &Store, item: &CartItem) -> Result<Bson, ModelError> {
    let result = store.cart_items.insert_one(item).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(result.inserted_id)
}

pub async fn list_by_email(store: &Store, user_email: &str) -> Result<Vec<CartItem>, ModelError> {
    let cursor = store
        .cart_items
        .find(doc! { "userEmail": user_email })
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    cursor.try_collect().await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Returns the number of documents removed (0 or 1).
pub async fn delete_by_id(store: &Store, id: ObjectId) -> Result<u64, ModelError> {
    let result = store
        .cart_items
        .delete_one(doc! { "_id": id })
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(result.deleted_count)
}
