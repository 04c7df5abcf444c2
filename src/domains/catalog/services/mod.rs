// Catalog domain services
pub mod product_service;
pub mod state;

pub use product_service::*;
pub use state::*;
