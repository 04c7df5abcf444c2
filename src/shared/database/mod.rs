// Database module
pub mod connection;
pub mod repositories;
pub mod memory;
pub mod stores;

pub use connection::*;
pub use repositories::*;
pub use memory::*;
pub use stores::*;
