use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use crate::domains::users::models::{NewUser, User};
use crate::shared::database::{MemoryOrderStore, MemorySessionStore, UserStore};
use crate::shared::errors::{StoreError, StoreResult};

#[derive(Default)]
struct Users {
    rows: Vec<User>,
    next_id: i64,
}

/// 메모리 사용자 저장소 (이메일 유니크 제약 적용)
///
/// `with_cascade`로 만들면 sessions / orders 외래키의 CASCADE 동작도
/// 그대로 재현합니다 (이메일 변경, 사용자 삭제).
#[derive(Default)]
pub struct MemoryUserStore {
    inner: Mutex<Users>,
    sessions: Option<Arc<MemorySessionStore>>,
    orders: Option<Arc<MemoryOrderStore>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cascade(sessions: Arc<MemorySessionStore>, orders: Arc<MemoryOrderStore>) -> Self {
        Self {
            inner: Mutex::default(),
            sessions: Some(sessions),
            orders: Some(orders),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> StoreResult<User> {
        let mut inner = self.inner.lock();
        if inner.rows.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict("users_email_key".to_string()));
        }

        inner.next_id += 1;
        let created = User {
            id: inner.next_id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            is_admin: user.is_admin,
            created_at: Utc::now(),
            updated_at: None,
        };
        inner.rows.push(created.clone());
        Ok(created)
    }

    async fn get_by_email(&self, email: &str) -> StoreResult<User> {
        self.inner
            .lock()
            .rows
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<User> {
        self.inner
            .lock()
            .rows
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        Ok(self.inner.lock().rows.clone())
    }

    async fn update(&self, user: &User) -> StoreResult<User> {
        let mut inner = self.inner.lock();
        if inner.rows.iter().any(|u| u.id != user.id && u.email == user.email) {
            return Err(StoreError::Conflict("users_email_key".to_string()));
        }

        let row = inner
            .rows
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(StoreError::NotFound)?;
        let previous = std::mem::replace(row, user.clone());

        if previous.email != user.email {
            if let Some(sessions) = &self.sessions {
                sessions.cascade_email_update(&previous.email, &user.email);
            }
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.lock();
        let index = inner
            .rows
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::NotFound)?;
        let removed = inner.rows.remove(index);

        if let Some(sessions) = &self.sessions {
            sessions.cascade_user_delete(&removed.email);
        }
        if let Some(orders) = &self.orders {
            orders.cascade_user_delete(removed.id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::domains::auth::models::Session;
    use crate::shared::database::SessionStore;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "A".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            is_admin: false,
        }
    }

    fn session(id: &str, email: &str) -> Session {
        Session {
            id: id.to_string(),
            user_email: email.to_string(),
            refresh_token: format!("token-{id}"),
            is_revoked: false,
            expires_at: Utc::now() + Duration::hours(1),
            created_at: Utc::now(),
        }
    }

    fn cascading() -> (MemoryUserStore, Arc<MemorySessionStore>) {
        let sessions = Arc::new(MemorySessionStore::new());
        let users = MemoryUserStore::with_cascade(sessions.clone(), Arc::new(MemoryOrderStore::new()));
        (users, sessions)
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let users = MemoryUserStore::new();
        users.create(new_user("a@b.com")).await.unwrap();
        let err = users.create(new_user("a@b.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn email_change_cascades_to_sessions() {
        let (users, sessions) = cascading();
        let mut user = users.create(new_user("a@b.com")).await.unwrap();
        sessions.create(session("s1", "a@b.com")).await.unwrap();
        sessions.create(session("s2", "other@b.com")).await.unwrap();

        user.email = "new@b.com".to_string();
        users.update(&user).await.unwrap();

        assert_eq!(sessions.get("s1").await.unwrap().user_email, "new@b.com");
        assert_eq!(sessions.get("s2").await.unwrap().user_email, "other@b.com");
    }

    #[tokio::test]
    async fn user_delete_cascades_to_sessions() {
        let (users, sessions) = cascading();
        let user = users.create(new_user("a@b.com")).await.unwrap();
        sessions.create(session("s1", "a@b.com")).await.unwrap();
        sessions.create(session("s2", "other@b.com")).await.unwrap();

        users.delete(user.id).await.unwrap();

        assert_eq!(sessions.get("s1").await, Err(StoreError::NotFound));
        assert!(sessions.get("s2").await.is_ok());
        assert_eq!(users.delete(user.id).await, Err(StoreError::NotFound));
    }
}
