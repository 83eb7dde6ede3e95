use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeFile,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::ServerState;

pub mod bookings;
pub mod cart;
pub mod catalog;
pub mod products;
pub mod users;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: the static landing page, the health
/// probe, and the resource routes sharing the injected store state.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let public = Router::new()
        .route_service("/", ServeFile::new("static/index.html"))
        .route("/health", get(health));

    let api = Router::new()
        .route("/services", get(catalog::list_services))
        .route("/services/:id", get(catalog::get_service))
        .route("/bookings", post(bookings::create_booking))
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/products/:id", put(products::upsert_product))
        .route("/add-to-cart", post(cart::add_to_cart))
        .route("/get-cart/:userEmail", get(cart::get_cart))
        .route("/delete-cart-item/:itemId", delete(cart::delete_cart_item))
        .with_state(state);

    public
        .merge(api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
