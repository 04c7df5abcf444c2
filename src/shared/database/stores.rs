use std::sync::Arc;
use crate::shared::database::{
    Database, MemoryOrderStore, MemoryProductStore, MemorySessionStore, MemoryUserStore,
    OrderRepository, OrderStore, ProductRepository, ProductStore, SessionRepository,
    SessionStore, UserRepository, UserStore,
};

/// 저장소 묶음
/// Every store the services depend on, behind their traits
#[derive(Clone)]
pub struct Stores {
    pub sessions: Arc<dyn SessionStore>,
    pub users: Arc<dyn UserStore>,
    pub orders: Arc<dyn OrderStore>,
    pub products: Arc<dyn ProductStore>,
}

impl Stores {
    /// PostgreSQL 기반 저장소 (운영)
    pub fn postgres(db: &Database) -> Self {
        let pool = db.pool().clone();
        Self {
            sessions: Arc::new(SessionRepository::new(pool.clone())),
            users: Arc::new(UserRepository::new(pool.clone())),
            orders: Arc::new(OrderRepository::new(pool.clone())),
            products: Arc::new(ProductRepository::new(pool)),
        }
    }

    /// 메모리 저장소 (테스트). 외래키 CASCADE까지 재현
    pub fn in_memory() -> Self {
        let sessions = Arc::new(MemorySessionStore::new());
        let orders = Arc::new(MemoryOrderStore::new());
        Self {
            users: Arc::new(MemoryUserStore::with_cascade(sessions.clone(), orders.clone())),
            sessions,
            orders,
            products: Arc::new(MemoryProductStore::new()),
        }
    }
}
