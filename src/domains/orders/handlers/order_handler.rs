use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use crate::domains::orders::models::{CreateOrderRequest, Order, UpdateOrderStatusRequest};
use crate::shared::errors::OrderError;
use crate::shared::middleware::{AdminUser, AuthenticatedUser};
use crate::shared::services::AppState;

/// 주문 생성 핸들러
/// Create order handler: header and items are written atomically
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Invalid order (nothing was written)"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Order write failed and was rolled back")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), (StatusCode, Json<serde_json::Value>)> {
    let order = app_state
        .orders_state
        .order_service
        .create(authenticated_user.user_id(), request)
        .await
        .map_err(|e: OrderError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders with their items", body = [Order]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<Order>>, (StatusCode, Json<serde_json::Value>)> {
    let orders = app_state
        .orders_state
        .order_service
        .list()
        .await
        .map_err(|e: OrderError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/api/orders/my",
    responses(
        (status = 200, description = "Caller's orders, newest first", body = [Order]),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Orders"
)]
pub async fn my_orders(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<Vec<Order>>, (StatusCode, Json<serde_json::Value>)> {
    let orders = app_state
        .orders_state
        .order_service
        .list_mine(authenticated_user.user_id())
        .await
        .map_err(|e: OrderError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(orders))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = Order),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Order not found")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(app_state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateOrderStatusRequest>,
) -> Result<Json<Order>, (StatusCode, Json<serde_json::Value>)> {
    let order = app_state
        .orders_state
        .order_service
        .update_status(id, request.status)
        .await
        .map_err(|e: OrderError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(order))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Order and its items deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Order not found")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .orders_state
        .order_service
        .delete(&authenticated_user.claims, id)
        .await
        .map_err(|e: OrderError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}
