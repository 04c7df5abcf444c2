// Catalog domain state
use std::time::Duration;
use crate::domains::catalog::services::ProductService;
use crate::shared::database::Stores;

#[derive(Clone)]
pub struct CatalogState {
    pub product_service: ProductService,
}

impl CatalogState {
    pub fn new(stores: &Stores, storage_timeout: Duration) -> Self {
        Self {
            product_service: ProductService::new(stores.products.clone(), storage_timeout),
        }
    }
}
