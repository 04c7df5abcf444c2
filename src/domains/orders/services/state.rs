// Orders domain state
use std::time::Duration;
use crate::domains::orders::services::OrderService;
use crate::shared::database::Stores;

#[derive(Clone)]
pub struct OrdersState {
    pub order_service: OrderService,
}

impl OrdersState {
    pub fn new(stores: &Stores, storage_timeout: Duration) -> Self {
        Self {
            order_service: OrderService::new(stores.orders.clone(), storage_timeout),
        }
    }
}
