// Users domain services
pub mod user_service;
pub mod state;

pub use user_service::*;
pub use state::*;
