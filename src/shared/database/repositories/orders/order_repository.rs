use std::collections::HashMap;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction};
use sqlx::postgres::PgRow;
use crate::domains::orders::models::{NewOrder, NewOrderItem, Order, OrderItem, OrderStatus};
use crate::shared::errors::{StoreError, StoreResult};

/// 주문 저장소 계약
/// Order store contract
///
/// `create`는 주문 헤더와 모든 항목을 하나의 원자적 단위로 기록합니다.
/// 항목 하나라도 실패하면 헤더를 포함한 전체가 롤백되고 호출자는
/// 부분 주문을 볼 수 없습니다.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, order: NewOrder) -> StoreResult<Order>;

    async fn get(&self, id: i64) -> StoreResult<Order>;

    async fn list(&self) -> StoreResult<Vec<Order>>;

    async fn list_for_user(&self, user_id: i64) -> StoreResult<Vec<Order>>;

    async fn update_status(&self, id: i64, status: OrderStatus) -> StoreResult<Order>;

    /// 항목 + 헤더 삭제 (원자적). 없으면 `NotFound`
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 주문 헤더 INSERT → 생성된 id 반환
    async fn insert_header(tx: &mut Transaction<'_, Postgres>, order: &NewOrder) -> StoreResult<PgRow> {
        let row = sqlx::query(
            r#"
            INSERT INTO orders (user_id, payment_method, tax_price, shipping_price, total_price, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING id, user_id, payment_method, tax_price, shipping_price, total_price, status, created_at, updated_at
            "#,
        )
        .bind(order.user_id)
        .bind(&order.payment_method)
        .bind(order.tax_price)
        .bind(order.shipping_price)
        .bind(order.total_price)
        .bind(OrderStatus::Pending.as_str())
        .fetch_one(&mut **tx)
        .await?;

        Ok(row)
    }

    /// 주문 항목 INSERT (헤더 id로 스탬프)
    async fn insert_item(
        tx: &mut Transaction<'_, Postgres>,
        order_id: i64,
        item: NewOrderItem,
    ) -> StoreResult<OrderItem> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO order_items (order_id, name, quantity, image, price, product_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(order_id)
        .bind(&item.name)
        .bind(item.quantity)
        .bind(&item.image)
        .bind(item.price)
        .bind(item.product_id)
        .fetch_one(&mut **tx)
        .await?;

        Ok(item.into_item(id, order_id))
    }

    async fn write_order(tx: &mut Transaction<'_, Postgres>, order: NewOrder) -> StoreResult<Order> {
        let header = Self::insert_header(tx, &order).await?;
        let mut created = Self::row_to_order(&header, Vec::with_capacity(order.items.len()))?;

        for item in order.items {
            let item = Self::insert_item(tx, created.id, item).await?;
            created.items.push(item);
        }

        Ok(created)
    }

    async fn delete_rows(tx: &mut Transaction<'_, Postgres>, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn items_for(&self, order_ids: &[i64]) -> StoreResult<HashMap<i64, Vec<OrderItem>>> {
        let mut grouped: HashMap<i64, Vec<OrderItem>> = HashMap::new();
        if order_ids.is_empty() {
            return Ok(grouped);
        }

        let rows = sqlx::query(
            r#"
            SELECT id, order_id, name, quantity, image, price, product_id
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await?;

        for row in &rows {
            let item = Self::row_to_item(row);
            grouped.entry(item.order_id).or_default().push(item);
        }
        Ok(grouped)
    }

    async fn with_items(&self, rows: Vec<PgRow>) -> StoreResult<Vec<Order>> {
        let ids: Vec<i64> = rows.iter().map(|r| r.get("id")).collect();
        let mut items = self.items_for(&ids).await?;

        rows.iter()
            .map(|row| {
                let id: i64 = row.get("id");
                Self::row_to_order(row, items.remove(&id).unwrap_or_default())
            })
            .collect()
    }

    fn row_to_order(row: &PgRow, items: Vec<OrderItem>) -> StoreResult<Order> {
        let status: String = row.get("status");
        let status = status.parse::<OrderStatus>().map_err(StoreError::Database)?;

        Ok(Order {
            id: row.get("id"),
            user_id: row.get("user_id"),
            payment_method: row.get("payment_method"),
            tax_price: row.get("tax_price"),
            shipping_price: row.get("shipping_price"),
            total_price: row.get("total_price"),
            status,
            items,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    fn row_to_item(row: &PgRow) -> OrderItem {
        OrderItem {
            id: row.get("id"),
            order_id: row.get("order_id"),
            name: row.get("name"),
            quantity: row.get("quantity"),
            image: row.get("image"),
            price: row.get("price"),
            product_id: row.get("product_id"),
        }
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    /// 주문 생성 (트랜잭션)
    /// Create order: header first (for its id), then every item, then commit.
    async fn create(&self, order: NewOrder) -> StoreResult<Order> {
        let mut tx = self.pool.begin().await?;

        match Self::write_order(&mut tx, order).await {
            Ok(created) => {
                tx.commit().await?;
                Ok(created)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "Failed to roll back order transaction");
                }
                Err(err)
            }
        }
    }

    async fn get(&self, id: i64) -> StoreResult<Order> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, payment_method, tax_price, shipping_price, total_price, status, created_at, updated_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        self.with_items(vec![row])
            .await?
            .pop()
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> StoreResult<Vec<Order>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, payment_method, tax_price, shipping_price, total_price, status, created_at, updated_at
            FROM orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        self.with_items(rows).await
    }

    async fn list_for_user(&self, user_id: i64) -> StoreResult<Vec<Order>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, payment_method, tax_price, shipping_price, total_price, status, created_at, updated_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        self.with_items(rows).await
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> StoreResult<Order> {
        let updated = sqlx::query("UPDATE orders SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await?;

        if updated.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        self.get(id).await
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = Self::delete_rows(&mut tx, id).await;

        match result {
            Ok(()) => {
                tx.commit().await?;
                Ok(())
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "Failed to roll back order delete");
                }
                Err(err)
            }
        }
    }
}
