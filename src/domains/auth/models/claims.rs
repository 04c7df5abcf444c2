use serde::{Deserialize, Serialize};
use chrono::{DateTime, TimeZone, Utc};

/// 토큰 종류
/// Token kind: short-lived access or long-lived refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// 토큰 주체 (발급 대상 사용자)
/// The identity a token is issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub user_id: i64,
    pub email: String,
    pub is_admin: bool,
}

/// JWT Claims (토큰에 포함될 데이터)
/// JWT Claims (data to be included in token)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// 사용자 ID
    /// User ID
    pub user_id: i64,

    /// 이메일
    /// Email
    pub email: String,

    /// 관리자 여부
    /// Admin flag
    pub is_admin: bool,

    /// 토큰 고유 ID (발급마다 새로 생성, refresh token은 세션 PK로 사용)
    /// Unique token id; for refresh tokens it doubles as the session id
    pub jti: String,

    /// 토큰이 속한 세션 ID
    /// Session this token was issued under (equals `jti` for refresh tokens)
    pub sid: String,

    pub kind: TokenKind,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    pub fn subject(&self) -> Subject {
        Subject {
            user_id: self.user_id,
            email: self.email.clone(),
            is_admin: self.is_admin,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        timestamp(self.exp)
    }
}

fn timestamp(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap_or_default()
}
