// Request-scoped extractors
pub mod auth;

pub use auth::*;
