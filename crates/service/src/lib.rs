pub mod booking_service;
pub mod cart_service;
pub mod catalog_service;
pub mod errors;
pub mod ids;
pub mod product_service;
pub mod user_service;
