use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

// =====================================================
// Order 모델
// =====================================================
// 역할: 주문 헤더 + 주문 항목
//
// 불변식: OrderItem은 커밋된 Order 없이 존재하지 않음.
// 입력 타입(NewOrder/NewOrderItem)에는 id가 없고,
// 저장 후 타입(Order/OrderItem)에만 id와 order_id가 있음.
// =====================================================

/// 주문 상태
/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

/// 주문 정보 (데이터베이스에서 조회한 주문)
/// Order information (order retrieved from database)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = Order)]
pub struct Order {
    /// Order ID (BIGSERIAL, auto-generated)
    /// 주문 ID (DB에서 자동 생성)
    pub id: i64,

    /// 주문자 ID
    pub user_id: i64,

    #[schema(example = "card")]
    pub payment_method: String,

    #[schema(value_type = String, example = "10.00")]
    pub tax_price: Decimal,

    #[schema(value_type = String, example = "20.00")]
    pub shipping_price: Decimal,

    #[schema(value_type = String, example = "129.99")]
    pub total_price: Decimal,

    pub status: OrderStatus,

    pub items: Vec<OrderItem>,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// 주문 항목 (저장됨)
/// Persisted order line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = OrderItem)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub name: String,
    pub quantity: i64,
    pub image: String,
    #[schema(value_type = String, example = "99.99")]
    pub price: Decimal,
    pub product_id: i64,
}

/// 주문 항목 입력
/// Line item as submitted by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = NewOrderItem)]
pub struct NewOrderItem {
    #[schema(example = "Wireless Mouse")]
    pub name: String,
    #[schema(example = 1)]
    pub quantity: i64,
    #[serde(default)]
    pub image: String,
    #[schema(value_type = String, example = "99.99")]
    pub price: Decimal,
    pub product_id: i64,
}

impl NewOrderItem {
    pub(crate) fn into_item(self, id: i64, order_id: i64) -> OrderItem {
        OrderItem {
            id,
            order_id,
            name: self.name,
            quantity: self.quantity,
            image: self.image,
            price: self.price,
            product_id: self.product_id,
        }
    }
}

/// 주문 생성 요청
/// Create order request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateOrderRequest)]
pub struct CreateOrderRequest {
    pub payment_method: String,
    #[schema(value_type = String)]
    pub tax_price: Decimal,
    #[schema(value_type = String)]
    pub shipping_price: Decimal,
    #[schema(value_type = String)]
    pub total_price: Decimal,
    pub items: Vec<NewOrderItem>,
}

/// 저장소에 넘기는 주문 (주문자 포함)
/// Order handed to the transactional writer
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i64,
    pub payment_method: String,
    pub tax_price: Decimal,
    pub shipping_price: Decimal,
    pub total_price: Decimal,
    pub items: Vec<NewOrderItem>,
}

impl NewOrder {
    pub fn from_request(user_id: i64, request: CreateOrderRequest) -> Self {
        Self {
            user_id,
            payment_method: request.payment_method,
            tax_price: request.tax_price,
            shipping_price: request.shipping_price,
            total_price: request.total_price,
            items: request.items,
        }
    }
}

/// 주문 상태 변경 요청
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = UpdateOrderStatusRequest)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_its_own_rendering() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert!("lost".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"shipped\"");
    }
}
