// Users domain models
pub mod user;

pub use user::*;
