// Orders domain routes
use axum::{routing::{delete, get, patch}, Router};
use crate::domains::orders::handlers::order_handler;
use crate::shared::services::AppState;

/// Create orders router
/// 주문 라우터 생성
pub fn create_orders_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(order_handler::list_orders).post(order_handler::create_order),
        )
        .route("/my", get(order_handler::my_orders))
        .route("/:id", delete(order_handler::delete_order))
        .route("/:id/status", patch(order_handler::update_order_status))
}
