use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use rust_decimal::Decimal;
use crate::domains::catalog::models::{CreateProductRequest, Product, UpdateProductRequest};
use crate::shared::database::ProductStore;
use crate::shared::errors::{CatalogError, StoreError};
use crate::shared::utils::with_deadline;

/// 상품 서비스
/// ProductService: plain CRUD over the product store
#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductStore>,
    storage_timeout: Duration,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductStore>, storage_timeout: Duration) -> Self {
        Self { products, storage_timeout }
    }

    pub async fn create(&self, request: CreateProductRequest) -> Result<Product, CatalogError> {
        if request.name.trim().is_empty() {
            return Err(CatalogError::Validation("name is required".to_string()));
        }
        validate(request.price, request.count_in_stock)?;

        let product = with_deadline(self.storage_timeout, self.products.create(request)).await?;
        tracing::info!(product_id = product.id, "Product created");
        Ok(product)
    }

    pub async fn get(&self, id: i64) -> Result<Product, CatalogError> {
        with_deadline(self.storage_timeout, self.products.get(id))
            .await
            .map_err(|e| not_found_or(e, id))
    }

    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(with_deadline(self.storage_timeout, self.products.list()).await?)
    }

    /// 부분 수정 (요청에 있는 필드만 반영)
    pub async fn update(&self, id: i64, request: UpdateProductRequest) -> Result<Product, CatalogError> {
        let mut product = self.get(id).await?;
        request.apply(&mut product, Utc::now());

        if product.name.trim().is_empty() {
            return Err(CatalogError::Validation("name must not be empty".to_string()));
        }
        validate(product.price, product.count_in_stock)?;

        with_deadline(self.storage_timeout, self.products.update(&product))
            .await
            .map_err(|e| not_found_or(e, id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), CatalogError> {
        with_deadline(self.storage_timeout, self.products.delete(id))
            .await
            .map_err(|e| not_found_or(e, id))?;
        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }
}

fn validate(price: Decimal, count_in_stock: i64) -> Result<(), CatalogError> {
    if price < Decimal::ZERO {
        return Err(CatalogError::Validation("price must not be negative".to_string()));
    }
    if count_in_stock < 0 {
        return Err(CatalogError::Validation("count_in_stock must not be negative".to_string()));
    }
    Ok(())
}

fn not_found_or(err: StoreError, id: i64) -> CatalogError {
    match err {
        StoreError::NotFound => CatalogError::NotFound { id },
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::shared::database::MemoryProductStore;

    fn service() -> ProductService {
        ProductService::new(Arc::new(MemoryProductStore::new()), Duration::from_secs(1))
    }

    fn request(name: &str, price: Decimal) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            image: String::new(),
            category: "Electronics".to_string(),
            description: String::new(),
            rating: 0,
            num_reviews: 0,
            price,
            count_in_stock: 3,
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let service = service();
        let created = service.create(request("Mouse", Decimal::new(2999, 2))).await.unwrap();
        assert_eq!(service.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let service = service();
        assert_matches!(
            service.create(request("Mouse", Decimal::new(-1, 0))).await,
            Err(CatalogError::Validation(_))
        );
    }

    #[tokio::test]
    async fn update_can_set_stock_to_zero() {
        let service = service();
        let created = service.create(request("Mouse", Decimal::new(2999, 2))).await.unwrap();

        let updated = service
            .update(
                created.id,
                UpdateProductRequest {
                    count_in_stock: Some(0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.count_in_stock, 0);
        assert_eq!(updated.name, "Mouse");
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let service = service();
        assert_matches!(service.get(5).await, Err(CatalogError::NotFound { id: 5 }));
        assert_matches!(service.delete(5).await, Err(CatalogError::NotFound { id: 5 }));
        assert_matches!(
            service.update(5, UpdateProductRequest::default()).await,
            Err(CatalogError::NotFound { id: 5 })
        );
    }
}
