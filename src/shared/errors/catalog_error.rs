use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;
use crate::shared::errors::StoreError;

/// 상품 관련 에러
/// Product catalog errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Product not found: id={id}")]
    NotFound { id: i64 },

    #[error("Invalid product: {0}")]
    Validation(String),

    /// 상세 내용은 로그에만 남김
    #[error("Storage error")]
    Storage(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Cancelled => CatalogError::Cancelled,
            StoreError::Constraint(constraint) => {
                tracing::warn!(%constraint, "Product rejected by storage constraint");
                CatalogError::Validation("rejected by a storage rule".to_string())
            }
            other => {
                tracing::error!(error = %other, "Catalog storage failure");
                CatalogError::Storage(other.to_string())
            }
        }
    }
}

impl From<CatalogError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: CatalogError) -> Self {
        let status = match &err {
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Cancelled => StatusCode::REQUEST_TIMEOUT,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_names_are_not_returned() {
        let (status, Json(body)): (StatusCode, Json<serde_json::Value>) =
            CatalogError::from(StoreError::Constraint("products_price_check".into())).into();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.to_string().contains("products_price_check"));

        let (_, Json(body)): (StatusCode, Json<serde_json::Value>) =
            CatalogError::from(StoreError::Database("boom".into())).into();
        assert_eq!(body["error"], "Storage error");
    }
}
