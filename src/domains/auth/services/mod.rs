// Auth domain services
pub mod token_service;
pub mod session_manager;
pub mod session_reaper;
pub mod state;

pub use token_service::*;
pub use session_manager::*;
pub use session_reaper::*;
pub use state::*;
