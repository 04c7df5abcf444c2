use async_trait::async_trait;
use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use crate::domains::catalog::models::{CreateProductRequest, Product};
use crate::shared::errors::{StoreError, StoreResult};

/// 상품 저장소 계약
/// Product store contract
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create(&self, product: CreateProductRequest) -> StoreResult<Product>;

    async fn get(&self, id: i64) -> StoreResult<Product>;

    async fn list(&self) -> StoreResult<Vec<Product>>;

    async fn update(&self, product: &Product) -> StoreResult<Product>;

    async fn delete(&self, id: i64) -> StoreResult<()>;
}

pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: &PgRow) -> Product {
        Product {
            id: row.get("id"),
            name: row.get("name"),
            image: row.get("image"),
            category: row.get("category"),
            description: row.get("description"),
            rating: row.get("rating"),
            num_reviews: row.get("num_reviews"),
            price: row.get("price"),
            count_in_stock: row.get("count_in_stock"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn create(&self, product: CreateProductRequest) -> StoreResult<Product> {
        let row = sqlx::query(
            r#"
            INSERT INTO products (name, image, category, description, rating, num_reviews, price, count_in_stock, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
            RETURNING id, name, image, category, description, rating, num_reviews, price, count_in_stock, created_at, updated_at
            "#,
        )
        .bind(&product.name)
        .bind(&product.image)
        .bind(&product.category)
        .bind(&product.description)
        .bind(product.rating)
        .bind(product.num_reviews)
        .bind(product.price)
        .bind(product.count_in_stock)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::row_to_product(&row))
    }

    async fn get(&self, id: i64) -> StoreResult<Product> {
        let row = sqlx::query(
            r#"
            SELECT id, name, image, category, description, rating, num_reviews, price, count_in_stock, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::row_to_product(&row))
    }

    async fn list(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, image, category, description, rating, num_reviews, price, count_in_stock, created_at, updated_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_product).collect())
    }

    async fn update(&self, product: &Product) -> StoreResult<Product> {
        let row = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, image = $3, category = $4, description = $5, rating = $6,
                num_reviews = $7, price = $8, count_in_stock = $9, updated_at = $10
            WHERE id = $1
            RETURNING id, name, image, category, description, rating, num_reviews, price, count_in_stock, created_at, updated_at
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.image)
        .bind(&product.category)
        .bind(&product.description)
        .bind(product.rating)
        .bind(product.num_reviews)
        .bind(product.price)
        .bind(product.count_in_stock)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::row_to_product(&row))
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
