// Users domain routes
use axum::{routing::{delete, get}, Router};
use crate::domains::users::handlers::user_handler;
use crate::shared::services::AppState;

/// Create users router
/// 사용자 라우터 생성
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(user_handler::list_users)
                .post(user_handler::create_user)
                .patch(user_handler::update_user),
        )
        .route("/:id", delete(user_handler::delete_user))
}
