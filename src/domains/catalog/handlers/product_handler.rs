use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use crate::domains::catalog::models::{CreateProductRequest, Product, UpdateProductRequest};
use crate::shared::errors::CatalogError;
use crate::shared::middleware::AdminUser;
use crate::shared::services::AppState;

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid product"),
        (status = 403, description = "Admin only")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    _admin: AdminUser,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), (StatusCode, Json<serde_json::Value>)> {
    let product = app_state
        .catalog_state
        .product_service
        .create(request)
        .await
        .map_err(|e: CatalogError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products", body = [Product])
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Product>>, (StatusCode, Json<serde_json::Value>)> {
    let products = app_state
        .catalog_state
        .product_service
        .list()
        .await
        .map_err(|e: CatalogError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "Product not found")
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, (StatusCode, Json<serde_json::Value>)> {
    let product = app_state
        .catalog_state
        .product_service
        .get(id)
        .await
        .map_err(|e: CatalogError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(product))
}

/// 상품 부분 수정
/// Partial update; fields left out of the body are unchanged
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid product"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Product not found")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<Product>, (StatusCode, Json<serde_json::Value>)> {
    let product = app_state
        .catalog_state
        .product_service
        .update(id, request)
        .await
        .map_err(|e: CatalogError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Product not found")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .catalog_state
        .product_service
        .delete(id)
        .await
        .map_err(|e: CatalogError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}
