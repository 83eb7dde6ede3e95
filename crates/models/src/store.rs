use mongodb::bson::Document;
use mongodb::{Collection, Database};

use crate::cart_item::CartItem;

/// Bundle of collection handles, obtained once at startup and passed into
/// handlers. Handles are cheap clones over the shared client; no global
/// connection state exists anywhere.
#[derive(Clone)]
pub struct Store {
    pub services: Collection<Document>,
    pub products: Collection<Document>,
    pub bookings: Collection<Document>,
    pub users: Collection<Document>,
    pub cart_items: Collection<CartItem>,
}

impl Store {
    pub fn new(db: &Database) -> Self {
        Self {
            services: db.collection("services"),
            products: db.collection("products"),
            bookings: db.collection("bookings"),
            users: db.collection("users"),
            cart_items: db.collection("cartProducts"),
        }
    }
}
