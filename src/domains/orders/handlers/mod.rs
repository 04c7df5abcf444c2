// Orders domain handlers
pub mod order_handler;
