use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// 세션 상태
/// Session lifecycle state. A deleted session has no row and so no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Revoked,
}

/// 세션 모델 (DB 저장용)
/// Session row, keyed by the refresh token's id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// refresh token의 jti
    pub id: String,
    pub user_email: String,
    /// 발급된 refresh token 원문
    pub refresh_token: String,
    pub is_revoked: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn state(&self) -> SessionState {
        if self.is_revoked {
            SessionState::Revoked
        } else {
            SessionState::Active
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
