use std::sync::Arc;
use std::time::Duration;
use crate::domains::auth::models::Claims;
use crate::domains::orders::models::{CreateOrderRequest, NewOrder, Order, OrderStatus};
use crate::shared::database::OrderStore;
use crate::shared::errors::{OrderError, StoreError};
use crate::shared::utils::with_deadline;

// =====================================================
// OrderService
// =====================================================
// 역할: 주문 생성 / 조회 / 상태 변경 / 삭제
//
// 주문 생성은 OrderStore::create 하나로 헤더 + 항목을 원자적으로 기록.
// 실패 시 호출자는 부분 주문을 볼 수 없음.
// =====================================================

#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    storage_timeout: Duration,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OrderStore>, storage_timeout: Duration) -> Self {
        Self { orders, storage_timeout }
    }

    /// 주문 생성 (주문자 = 호출자)
    pub async fn create(&self, user_id: i64, request: CreateOrderRequest) -> Result<Order, OrderError> {
        if request.items.is_empty() {
            return Err(OrderError::Validation("an order needs at least one item".to_string()));
        }
        if request.payment_method.trim().is_empty() {
            return Err(OrderError::Validation("payment_method is required".to_string()));
        }

        let order = NewOrder::from_request(user_id, request);
        let created = with_deadline(self.storage_timeout, self.orders.create(order))
            .await
            .inspect_err(|e| tracing::warn!(user_id, error = %e, "Order write rolled back"))?;

        tracing::info!(order_id = created.id, user_id, items = created.items.len(), "Order created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        Ok(with_deadline(self.storage_timeout, self.orders.list()).await?)
    }

    /// 내 주문 목록 (최신순)
    pub async fn list_mine(&self, user_id: i64) -> Result<Vec<Order>, OrderError> {
        Ok(with_deadline(self.storage_timeout, self.orders.list_for_user(user_id)).await?)
    }

    pub async fn update_status(&self, id: i64, status: OrderStatus) -> Result<Order, OrderError> {
        let order = with_deadline(self.storage_timeout, self.orders.update_status(id, status))
            .await
            .map_err(|e| not_found_or(e, id))?;

        tracing::info!(order_id = id, status = %status, "Order status changed");
        Ok(order)
    }

    /// 주문 삭제 (주문자 본인 또는 관리자)
    pub async fn delete(&self, caller: &Claims, id: i64) -> Result<(), OrderError> {
        let order = with_deadline(self.storage_timeout, self.orders.get(id))
            .await
            .map_err(|e| not_found_or(e, id))?;

        if order.user_id != caller.user_id && !caller.is_admin {
            return Err(OrderError::Forbidden);
        }

        with_deadline(self.storage_timeout, self.orders.delete(id))
            .await
            .map_err(|e| not_found_or(e, id))?;

        tracing::info!(order_id = id, "Order deleted");
        Ok(())
    }
}

fn not_found_or(err: StoreError, id: i64) -> OrderError {
    match err {
        StoreError::NotFound => OrderError::NotFound { id },
        other => other.into(),
    }
}
