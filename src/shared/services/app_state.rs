use crate::domains::auth::services::AuthState;
use crate::domains::catalog::services::CatalogState;
use crate::domains::orders::services::OrdersState;
use crate::domains::users::services::UsersState;
use crate::shared::config::AuthConfig;
use crate::shared::database::Stores;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 각 도메인의 State를 조합하여 전체 애플리케이션 상태를 관리.
/// 저장소는 trait 객체라서 Postgres/메모리 구현을 바꿔 끼울 수 있음.
#[derive(Clone)]
pub struct AppState {
    /// 저장소 묶음 (공유)
    /// Stores (shared)
    pub stores: Stores,
    pub auth_state: AuthState,
    pub users_state: UsersState,
    pub catalog_state: CatalogState,
    pub orders_state: OrdersState,
}

impl AppState {
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(config: AuthConfig, stores: Stores) -> Self {
        let storage_timeout = config.storage_timeout;

        Self {
            users_state: UsersState::new(&stores, storage_timeout),
            catalog_state: CatalogState::new(&stores, storage_timeout),
            orders_state: OrdersState::new(&stores, storage_timeout),
            auth_state: AuthState::new(config, &stores),
            stores,
        }
    }
}
