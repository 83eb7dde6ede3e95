//! Identifier handling. Path parameters arrive as strings and must become
//! store-native ObjectIds through an explicit validation step; a malformed
//! value is a caller error, never a crashed handler.

use mongodb::bson::{oid::ObjectId, Bson};
use serde_json::Value;

use crate::errors::ServiceError;

pub fn parse_object_id(raw: &str) -> Result<ObjectId, ServiceError> {
    ObjectId::parse_str(raw).map_err(|_| ServiceError::invalid_id(raw))
}

/// JSON form of a freshly assigned identifier. ObjectIds render as their
/// hex string; anything else (caller-supplied `_id`) falls back to relaxed
/// extended JSON.
pub fn inserted_id_json(id: Bson) -> Value {
    match id {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        other => other.into_relaxed_extjson(),
    }
}
