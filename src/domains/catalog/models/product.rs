use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// 상품 정보
/// Product information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = Product)]
pub struct Product {
    pub id: i64,
    #[schema(example = "Wireless Mouse")]
    pub name: String,
    #[schema(example = "/images/mouse.jpg")]
    pub image: String,
    #[schema(example = "Electronics")]
    pub category: String,
    pub description: String,
    pub rating: i64,
    pub num_reviews: i64,
    #[schema(value_type = String, example = "29.99")]
    pub price: Decimal,
    pub count_in_stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// 상품 생성 요청
/// Create product request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateProductRequest)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub num_reviews: i64,
    #[schema(value_type = String, example = "29.99")]
    pub price: Decimal,
    #[serde(default)]
    pub count_in_stock: i64,
}

/// 상품 수정 요청 (부분 수정)
/// Partial update. Each field is `Option` so an explicit zero is distinguishable
/// from "leave unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[schema(as = UpdateProductRequest)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i64>,
    pub num_reviews: Option<i64>,
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,
    pub count_in_stock: Option<i64>,
}

impl UpdateProductRequest {
    /// 요청된 필드만 반영
    /// Apply the present fields onto `product`
    pub fn apply(self, product: &mut Product, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(rating) = self.rating {
            product.rating = rating;
        }
        if let Some(num_reviews) = self.num_reviews {
            product.num_reviews = num_reviews;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(count_in_stock) = self.count_in_stock {
            product.count_in_stock = count_in_stock;
        }
        product.updated_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 1,
            name: "Mouse".into(),
            image: "m.jpg".into(),
            category: "Electronics".into(),
            description: "".into(),
            rating: 4,
            num_reviews: 10,
            price: Decimal::new(2999, 2),
            count_in_stock: 5,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn explicit_zero_is_applied() {
        let mut p = product();
        let patch = UpdateProductRequest {
            count_in_stock: Some(0),
            rating: Some(0),
            ..Default::default()
        };
        patch.apply(&mut p, Utc::now());
        assert_eq!(p.count_in_stock, 0);
        assert_eq!(p.rating, 0);
        assert_eq!(p.num_reviews, 10);
        assert!(p.updated_at.is_some());
    }

    #[test]
    fn absent_fields_are_untouched() {
        let mut p = product();
        UpdateProductRequest::default().apply(&mut p, Utc::now());
        assert_eq!(p.name, "Mouse");
        assert_eq!(p.price, Decimal::new(2999, 2));
    }
}
