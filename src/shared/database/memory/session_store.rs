use std::collections::HashMap;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use crate::domains::auth::models::Session;
use crate::shared::database::SessionStore;
use crate::shared::errors::{StoreError, StoreResult};

/// 메모리 세션 저장소
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    // sessions.user_email FK: ON UPDATE CASCADE
    pub(crate) fn cascade_email_update(&self, old_email: &str, new_email: &str) {
        for session in self.sessions.lock().values_mut() {
            if session.user_email == old_email {
                session.user_email = new_email.to_string();
            }
        }
    }

    // sessions.user_email FK: ON DELETE CASCADE
    pub(crate) fn cascade_user_delete(&self, email: &str) {
        self.sessions.lock().retain(|_, s| s.user_email != email);
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, session: Session) -> StoreResult<Session> {
        let mut sessions = self.sessions.lock();
        if sessions.contains_key(&session.id) {
            return Err(StoreError::Conflict("sessions_pkey".to_string()));
        }
        sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    async fn get(&self, id: &str) -> StoreResult<Session> {
        self.sessions.lock().get(id).cloned().ok_or(StoreError::NotFound)
    }

    async fn revoke(&self, id: &str) -> StoreResult<()> {
        if let Some(session) = self.sessions.lock().get_mut(id) {
            session.is_revoked = true;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.sessions.lock().remove(id);
        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> StoreResult<u64> {
        let mut sessions = self.sessions.lock();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired_at(now));
        Ok((before - sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(id: &str, expires_at: DateTime<Utc>) -> Session {
        Session {
            id: id.to_string(),
            user_email: "a@b.com".to_string(),
            refresh_token: format!("token-{id}"),
            is_revoked: false,
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn duplicate_id_conflicts() {
        let store = MemorySessionStore::new();
        let expires = Utc::now() + Duration::hours(1);
        store.create(session("s1", expires)).await.unwrap();
        let err = store.create(session("s1", expires)).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn revoke_and_delete_are_idempotent() {
        let store = MemorySessionStore::new();
        store.create(session("s1", Utc::now() + Duration::hours(1))).await.unwrap();

        store.revoke("s1").await.unwrap();
        store.revoke("s1").await.unwrap();
        assert!(store.get("s1").await.unwrap().is_revoked);

        store.delete("s1").await.unwrap();
        store.delete("s1").await.unwrap();
        assert_eq!(store.get("s1").await, Err(StoreError::NotFound));
        store.revoke("missing").await.unwrap();
    }

    #[tokio::test]
    async fn delete_expired_keeps_live_sessions() {
        let store = MemorySessionStore::new();
        let now = Utc::now();
        store.create(session("old", now - Duration::minutes(1))).await.unwrap();
        store.create(session("live", now + Duration::hours(1))).await.unwrap();

        assert_eq!(store.delete_expired(now).await.unwrap(), 1);
        assert!(store.get("live").await.is_ok());
        assert_eq!(store.get("old").await, Err(StoreError::NotFound));
    }
}
