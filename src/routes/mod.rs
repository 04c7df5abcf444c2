// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::auth::routes::create_auth_router;
use crate::domains::catalog::routes::create_products_router;
use crate::domains::orders::routes::create_orders_router;
use crate::domains::users::routes::create_users_router;

// Import models for OpenAPI schema
use crate::domains::auth::models::*;
use crate::domains::catalog::models::*;
use crate::domains::orders::models::*;
use crate::domains::users::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::auth::handlers::auth_handler::login,
        crate::domains::auth::handlers::auth_handler::renew_access_token,
        crate::domains::auth::handlers::auth_handler::revoke_session,
        crate::domains::auth::handlers::auth_handler::logout,
        crate::domains::auth::handlers::auth_handler::get_me,
        crate::domains::users::handlers::user_handler::create_user,
        crate::domains::users::handlers::user_handler::list_users,
        crate::domains::users::handlers::user_handler::update_user,
        crate::domains::users::handlers::user_handler::delete_user,
        crate::domains::catalog::handlers::product_handler::create_product,
        crate::domains::catalog::handlers::product_handler::list_products,
        crate::domains::catalog::handlers::product_handler::get_product,
        crate::domains::catalog::handlers::product_handler::update_product,
        crate::domains::catalog::handlers::product_handler::delete_product,
        crate::domains::orders::handlers::order_handler::create_order,
        crate::domains::orders::handlers::order_handler::list_orders,
        crate::domains::orders::handlers::order_handler::my_orders,
        crate::domains::orders::handlers::order_handler::update_order_status,
        crate::domains::orders::handlers::order_handler::delete_order
    ),
    components(schemas(
        LoginRequest,
        LoginResponse,
        RenewAccessTokenRequest,
        RenewAccessTokenResponse,
        CreateUserRequest,
        UpdateUserRequest,
        UserResponse,
        ListUsersResponse,
        Product,
        CreateProductRequest,
        UpdateProductRequest,
        Order,
        OrderItem,
        OrderStatus,
        NewOrderItem,
        CreateOrderRequest,
        UpdateOrderStatusRequest
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Login, token renewal and session endpoints"),
        (name = "Users", description = "User registration and management"),
        (name = "Products", description = "Product catalog"),
        (name = "Orders", description = "Orders (header + items written atomically)")
    ),
    info(
        title = "E-commerce API Server",
        description = "Products, orders and users with token-based sessions",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합 + Swagger UI)
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/auth", create_auth_router())
        .nest("/api/users", create_users_router())
        .nest("/api/products", create_products_router())
        .nest("/api/orders", create_orders_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
