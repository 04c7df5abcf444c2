// Auth domain models
pub mod auth;
pub mod claims;
pub mod session;

pub use auth::*;
pub use claims::*;
pub use session::*;
