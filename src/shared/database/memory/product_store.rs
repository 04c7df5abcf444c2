use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use crate::domains::catalog::models::{CreateProductRequest, Product};
use crate::shared::database::ProductStore;
use crate::shared::errors::{StoreError, StoreResult};

#[derive(Default)]
struct Products {
    rows: Vec<Product>,
    next_id: i64,
}

/// 메모리 상품 저장소
#[derive(Default)]
pub struct MemoryProductStore {
    inner: Mutex<Products>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// products 테이블의 CHECK 제약과 동일
fn check(price: Decimal, count_in_stock: i64) -> StoreResult<()> {
    if price < Decimal::ZERO {
        return Err(StoreError::Constraint("products_price_check".to_string()));
    }
    if count_in_stock < 0 {
        return Err(StoreError::Constraint("products_count_in_stock_check".to_string()));
    }
    Ok(())
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, product: CreateProductRequest) -> StoreResult<Product> {
        check(product.price, product.count_in_stock)?;

        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let created = Product {
            id: inner.next_id,
            name: product.name,
            image: product.image,
            category: product.category,
            description: product.description,
            rating: product.rating,
            num_reviews: product.num_reviews,
            price: product.price,
            count_in_stock: product.count_in_stock,
            created_at: Utc::now(),
            updated_at: None,
        };
        inner.rows.push(created.clone());
        Ok(created)
    }

    async fn get(&self, id: i64) -> StoreResult<Product> {
        self.inner
            .lock()
            .rows
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> StoreResult<Vec<Product>> {
        Ok(self.inner.lock().rows.clone())
    }

    async fn update(&self, product: &Product) -> StoreResult<Product> {
        check(product.price, product.count_in_stock)?;

        let mut inner = self.inner.lock();
        let row = inner
            .rows
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(StoreError::NotFound)?;
        *row = product.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.lock();
        let before = inner.rows.len();
        inner.rows.retain(|p| p.id != id);
        if inner.rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
