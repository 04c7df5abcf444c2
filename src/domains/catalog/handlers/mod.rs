// Catalog domain handlers
pub mod product_handler;
