use tracing::info;

use crate::errors::ServiceError;
use crate::ids::parse_object_id;
use models::product::ProductFields;
use models::store::Store;

/// Replace the listed product fields by identifier, inserting when absent.
/// The outcome (matched vs upserted) is logged but deliberately not
/// surfaced: the route's contract is a fixed success message either way.
pub async fn upsert_product(store: &Store, raw_id: &str, fields: ProductFields) -> Result<(), ServiceError> {
    let id = parse_object_id(raw_id)?;
    let result = models::product::upsert(store, id, fields).await?;
    info!(
        %id,
        matched = result.matched_count,
        modified = result.modified_count,
        upserted = result.upserted_id.is_some(),
        "product upserted"
    );
    Ok(())
}
