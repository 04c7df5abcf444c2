// Catalog domain models
pub mod product;

pub use product::*;
