use mongodb::bson::{doc, oid::ObjectId, to_bson, Document};
use mongodb::results::UpdateResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ModelError;
use crate::store::Store;

/// The replaceable product fields. Values pass through as supplied by the
/// caller (string prices and the like are the store's problem, not ours);
/// fields missing from the request body are written as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFields {
    #[serde(default)]
    pub pname: Value,
    #[serde(default)]
    pub bname: Value,
    #[serde(rename = "selectedType", default)]
    pub selected_type: Value,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub image: Value,
    #[serde(default)]
    pub des: Value,
    #[serde(default)]
    pub rating: Value,
}

impl ProductFields {
    /// Build the `$set` payload covering exactly the listed fields.
    pub fn into_set_document(self) -> Result<Document, ModelError> {
        let to = |v: Value| to_bson(&v).map_err(|e| ModelError::Validation(e.to_string()));
        Ok(doc! {
            "pname": to(self.pname)?,
            "bname": to(self.bname)?,
            "selectedType": to(self.selected_type)?,
            "price": to(self.price)?,
            "image": to(self.image)?,
            "des": to(self.des)?,
            "rating": to(self.rating)?,
        })
    }
}

/// Replace-or-insert by identifier. The caller does not care whether a
/// matching document existed; the result is returned for logging only.
pub async fn upsert(store: &Store, id: ObjectId, fields: ProductFields) -> Result<UpdateResult, ModelError> {
    let update = doc! { "$set": fields.into_set_document()? };
    store
        .products
        .update_one(doc! { "_id": id }, update)
        .upsert(true)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
