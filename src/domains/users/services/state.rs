// Users domain state
use std::time::Duration;
use crate::domains::users::services::UserService;
use crate::shared::database::Stores;

#[derive(Clone)]
pub struct UsersState {
    pub user_service: UserService,
}

impl UsersState {
    pub fn new(stores: &Stores, storage_timeout: Duration) -> Self {
        Self {
            user_service: UserService::new(stores.users.clone(), storage_timeout),
        }
    }
}
