// Shared errors
pub mod auth_error;
pub mod store_error;
pub mod order_error;
pub mod catalog_error;

pub use auth_error::*;
pub use store_error::*;
pub use order_error::*;
pub use catalog_error::*;
