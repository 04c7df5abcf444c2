// Catalog domain routes
use axum::{routing::get, Router};
use crate::domains::catalog::handlers::product_handler;
use crate::shared::services::AppState;

/// Create products router
/// 상품 라우터 생성
pub fn create_products_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(product_handler::list_products).post(product_handler::create_product),
        )
        .route(
            "/:id",
            get(product_handler::get_product)
                .patch(product_handler::update_product)
                .delete(product_handler::delete_product),
        )
}
