use mongodb::bson::Document;
use tracing::info;

use crate::errors::ServiceError;
use crate::ids::parse_object_id;
use models::store::Store;

/// List the full services catalog, order as stored.
pub async fn list_services(store: &Store) -> Result<Vec<Document>, ServiceError> {
    let services = models::service::list_all(store).await?;
    Ok(services)
}

/// Fetch one service summary by its identifier. A well-formed id with no
/// match is not an error; the caller receives the absence.
pub async fn get_service(store: &Store, raw_id: &str) -> Result<Option<Document>, ServiceError> {
    let id = parse_object_id(raw_id)?;
    let service = models::service::find_summary_by_id(store, id).await?;
    if service.is_none() {
        info!(%id, "service lookup found nothing");
    }
    Ok(service)
}
