use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;
use crate::shared::errors::StoreError;

/// 주문 관련 에러
/// Order-related errors
#[derive(Error, Debug)]
pub enum OrderError {
    /// 주문을 찾을 수 없음
    #[error("Order not found: id={id}")]
    NotFound { id: i64 },

    /// 유효성 검증 실패
    /// Invalid order payload
    #[error("Invalid order: {0}")]
    Validation(String),

    /// 저장소 제약 위반으로 거부됨 (전체 롤백, 제약 이름은 로그에만)
    /// A storage rule rejected the order; nothing was written
    #[error("Order rejected, nothing was written")]
    Rejected,

    /// 다른 사용자의 주문
    #[error("Order belongs to another user")]
    Forbidden,

    /// 트랜잭션 실패 (전체 롤백됨). 상세 내용은 로그에만 남김
    /// The atomic write failed and was rolled back
    #[error("Failed to write order")]
    Storage(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl From<StoreError> for OrderError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Cancelled => OrderError::Cancelled,
            StoreError::Constraint(constraint) => {
                tracing::warn!(%constraint, "Order rejected by storage constraint, rolled back");
                OrderError::Rejected
            }
            other => {
                tracing::error!(error = %other, "Order storage failure");
                OrderError::Storage(other.to_string())
            }
        }
    }
}

impl From<OrderError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: OrderError) -> Self {
        let status = match &err {
            OrderError::NotFound { .. } => StatusCode::NOT_FOUND,
            OrderError::Validation(_) | OrderError::Rejected => StatusCode::BAD_REQUEST,
            OrderError::Forbidden => StatusCode::FORBIDDEN,
            OrderError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrderError::Cancelled => StatusCode::REQUEST_TIMEOUT,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}
