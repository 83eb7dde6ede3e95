use mongodb::bson::to_bson;
use serde_json::Value;
use tracing::info;

use crate::errors::ServiceError;
use crate::ids::{inserted_id_json, parse_object_id};
use models::cart_item::CartItem;
use models::store::Store;

/// Outcome of an add-to-cart request. Adding an item that is already in
/// the cart is a no-op, not an error.
pub enum CartAdd {
    AlreadyInCart,
    Added(Value),
}

pub async fn add_to_cart(store: &Store, product: Value, user_email: String) -> Result<CartAdd, ServiceError> {
    let product = to_bson(&product).map_err(|e| ServiceError::Validation(e.to_string()))?;

    let existing = models::cart_item::find_by_product_and_email(store, &product, &user_email).await?;
    if existing.is_some() {
        info!(%user_email, "product already in cart");
        return Ok(CartAdd::AlreadyInCart);
    }

    let item = CartItem { id: None, product, user_email: user_email.clone() };
    let inserted_id = models::cart_item::insert(store, &item).await?;
    let id_json = inserted_id_json(inserted_id);
    info!(%user_email, id = %id_json, "product added to cart");
    Ok(CartAdd::Added(id_json))
}

pub async fn get_cart(store: &Store, user_email: &str) -> Result<Vec<CartItem>, ServiceError> {
    let items = models::cart_item::list_by_email(store, user_email).await?;
    Ok(items)
}

/// Remove a cart item by identifier; deleting something that does not
/// exist is the one place this API reports not-found.
pub async fn delete_cart_item(store: &Store, raw_id: &str) -> Result<(), ServiceError> {
    let id = parse_object_id(raw_id)?;
    let deleted = models::cart_item::delete_by_id(store, id).await?;
    if deleted == 0 {
        return Err(ServiceError::NotFound("Item not found or unable to delete".into()));
    }
    info!(%id, "cart item deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    async fn get_store() -> Option<Store> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return None;
        }
        let uri = match std::env::var("MONGODB_URI") {
            Ok(uri) => uri,
            Err(_) => {
                eprintln!("skip: MONGODB_URI not set");
                return None;
            }
        };
        let client = match models::db::connect(&uri).await {
            Ok(c) => c,
            Err(e) => {
                eprintln!("skip: cannot connect to store: {}", e);
                return None;
            }
        };
        if models::db::ping(&client).await.is_err() {
            eprintln!("skip: store unreachable");
            return None;
        }
        let db = client.database(&format!("carDoctorSvcTest_{}", ObjectId::new().to_hex()));
        Some(Store::new(&db))
    }

    #[tokio::test]
    async fn cart_add_is_idempotent_per_product_and_email() -> Result<(), anyhow::Error> {
        let store = match get_store().await {
            Some(s) => s,
            None => return Ok(()),
        };
        let email = format!("svc_{}@example.com", ObjectId::new().to_hex());
        let product = json!({ "pname": "Air Filter", "price": "18" });

        let first = add_to_cart(&store, product.clone(), email.clone()).await?;
        assert!(matches!(first, CartAdd::Added(_)));
        let second = add_to_cart(&store, product, email.clone()).await?;
        assert!(matches!(second, CartAdd::AlreadyInCart));

        let items = get_cart(&store, &email).await?;
        assert_eq!(items.len(), 1);

        let id = items[0].id.expect("stored item has id").to_hex();
        delete_cart_item(&store, &id).await?;
        let err = delete_cart_item(&store, &id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
