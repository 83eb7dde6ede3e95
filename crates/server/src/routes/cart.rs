use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::state::ServerState;
use models::cart_item::CartItem;
use service::cart_service::{self, CartAdd};

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product: Value,
    #[serde(rename = "userEmail")]
    pub user_email: String,
}

pub async fn add_to_cart(
    State(state): State<ServerState>,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<Value>, ApiError> {
    match cart_service::add_to_cart(&state.store, req.product, req.user_email).await? {
        CartAdd::AlreadyInCart => Ok(Json(json!({ "message": "Product already in the cart" }))),
        CartAdd::Added(inserted_id) => Ok(Json(json!({
            "message": "Product added to cart successfully",
            "result": { "insertedId": inserted_id },
        }))),
    }
}

pub async fn get_cart(
    State(state): State<ServerState>,
    Path(user_email): Path<String>,
) -> Result<Json<Vec<CartItem>>, ApiError> {
    let items = cart_service::get_cart(&state.store, &user_email).await?;
    Ok(Json(items))
}

pub async fn delete_cart_item(
    State(state): State<ServerState>,
    Path(item_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    cart_service::delete_cart_item(&state.store, &item_id).await?;
    Ok(Json(json!({ "message": "Item deleted successfully" })))
}
