// All repositories module (Postgres store implementations)
pub mod auth;
pub mod catalog;
pub mod orders;

// Re-export all repositories for convenience
pub use auth::*;
pub use catalog::*;
pub use orders::*;
