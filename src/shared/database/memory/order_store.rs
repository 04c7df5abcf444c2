use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use crate::domains::orders::models::{NewOrder, NewOrderItem, Order, OrderStatus};
use crate::shared::database::OrderStore;
use crate::shared::errors::{StoreError, StoreResult};

#[derive(Default)]
struct Orders {
    rows: Vec<Order>,
    next_order_id: i64,
    next_item_id: i64,
}

/// 메모리 주문 저장소
///
/// 헤더와 항목을 먼저 스테이징한 뒤 모든 항목이 제약을 통과해야만
/// 한 번에 공개합니다. 실패 시 id 시퀀스도 증가하지 않습니다.
#[derive(Default)]
pub struct MemoryOrderStore {
    inner: Mutex<Orders>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 주문 헤더 수 (롤백 검증용)
    pub fn order_count(&self) -> usize {
        self.inner.lock().rows.len()
    }

    /// 저장된 주문 항목 수
    pub fn item_count(&self) -> usize {
        self.inner.lock().rows.iter().map(|o| o.items.len()).sum()
    }

    // orders.user_id FK: ON DELETE CASCADE (항목도 함께 삭제)
    pub(crate) fn cascade_user_delete(&self, user_id: i64) {
        self.inner.lock().rows.retain(|o| o.user_id != user_id);
    }
}

// order_items 테이블의 CHECK 제약과 동일
fn check_item(item: &NewOrderItem) -> StoreResult<()> {
    if item.quantity <= 0 {
        return Err(StoreError::Constraint("order_items_quantity_check".to_string()));
    }
    if item.price < Decimal::ZERO {
        return Err(StoreError::Constraint("order_items_price_check".to_string()));
    }
    Ok(())
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create(&self, order: NewOrder) -> StoreResult<Order> {
        let mut inner = self.inner.lock();

        let order_id = inner.next_order_id + 1;
        let mut item_id = inner.next_item_id;
        let mut items = Vec::with_capacity(order.items.len());
        for item in order.items {
            check_item(&item)?;
            item_id += 1;
            items.push(item.into_item(item_id, order_id));
        }

        let created = Order {
            id: order_id,
            user_id: order.user_id,
            payment_method: order.payment_method,
            tax_price: order.tax_price,
            shipping_price: order.shipping_price,
            total_price: order.total_price,
            status: OrderStatus::Pending,
            items,
            created_at: Utc::now(),
            updated_at: None,
        };

        inner.next_order_id = order_id;
        inner.next_item_id = item_id;
        inner.rows.push(created.clone());
        Ok(created)
    }

    async fn get(&self, id: i64) -> StoreResult<Order> {
        self.inner
            .lock()
            .rows
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> StoreResult<Vec<Order>> {
        Ok(self.inner.lock().rows.clone())
    }

    async fn list_for_user(&self, user_id: i64) -> StoreResult<Vec<Order>> {
        // 최신 주문 먼저
        Ok(self
            .inner
            .lock()
            .rows
            .iter()
            .rev()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> StoreResult<Order> {
        let mut inner = self.inner.lock();
        let order = inner
            .rows
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(StoreError::NotFound)?;
        order.status = status;
        order.updated_at = Some(Utc::now());
        Ok(order.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.lock();
        let before = inner.rows.len();
        inner.rows.retain(|o| o.id != id);
        if inner.rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
