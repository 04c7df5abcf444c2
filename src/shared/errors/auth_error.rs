use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;
use crate::shared::errors::StoreError;

/// 토큰 코덱 에러
/// Token codec errors (signature, expiry, format)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 서명 불일치
    /// Signature does not match the shared secret
    #[error("Invalid token signature")]
    InvalidSignature,

    /// 만료된 토큰 (서명은 유효)
    /// Correctly signed but expired
    #[error("Token has expired")]
    Expired,

    /// 형식이 잘못된 토큰
    /// Not a decodable token
    #[error("Malformed token")]
    Malformed,

    /// 용도가 다른 토큰 (access <-> refresh)
    /// Token kind does not match its use
    #[error("Token kind not accepted here")]
    WrongKind,

    /// 토큰 인코딩 실패
    #[error("Failed to encode token")]
    Encoding(String),

    /// 유효 기간은 0보다 커야 함
    #[error("Token duration must be positive")]
    InvalidDuration,
}

/// 인증 관련 에러
/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// 이메일이 이미 존재함
    /// Email already exists
    #[error("Email already exists: {email}")]
    EmailAlreadyExists { email: String },

    /// 잘못된 이메일 또는 비밀번호
    /// Invalid email or password (never says which)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// 잘못된 요청
    /// Malformed request body
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// 사용자를 찾을 수 없음
    /// User not found
    #[error("User not found: id={id}")]
    UserNotFound { id: i64 },

    /// 비밀번호 해싱 실패
    /// Failed to hash password
    #[error("Failed to hash password")]
    PasswordHashingFailed(String),

    /// 토큰 검증/발급 실패
    #[error("{0}")]
    Token(#[from] TokenError),

    /// Authorization 헤더 없음
    #[error("Missing authorization header")]
    MissingHeader,

    /// "Bearer <token>" 형식이 아님
    #[error("Invalid authorization header. Expected: 'Bearer <token>'")]
    MalformedHeader,

    /// 세션 없음
    #[error("Session not found")]
    SessionNotFound,

    /// 세션이 무효화됨
    #[error("Session revoked")]
    SessionRevoked,

    /// 세션 소유자와 토큰이 일치하지 않음
    /// Session does not belong to the token's subject
    #[error("Invalid session")]
    SessionMismatch,

    /// 관리자 권한 필요
    #[error("User is not admin")]
    Forbidden,

    /// 저장소 에러 (상세 내용은 로그에만 남김)
    /// Storage error; the detail is logged, never returned
    #[error("Storage error")]
    Storage(String),

    /// 데드라인 초과
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Cancelled => AuthError::Cancelled,
            other => {
                tracing::error!(error = %other, "Auth storage failure");
                AuthError::Storage(other.to_string())
            }
        }
    }
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::EmailAlreadyExists { .. } => StatusCode::CONFLICT,
            AuthError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            AuthError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials
            | AuthError::MissingHeader
            | AuthError::MalformedHeader
            | AuthError::SessionNotFound
            | AuthError::SessionRevoked
            | AuthError::SessionMismatch => StatusCode::UNAUTHORIZED,
            AuthError::Token(TokenError::Encoding(_))
            | AuthError::Token(TokenError::InvalidDuration) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::Token(_) => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::Cancelled => StatusCode::REQUEST_TIMEOUT,
            AuthError::PasswordHashingFailed(_)
            | AuthError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// AuthError를 HTTP 응답으로 변환
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        (err.status_code(), Json(json!({ "error": err.to_string() })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renewal_failures_are_unauthorized() {
        for err in [
            AuthError::Token(TokenError::InvalidSignature),
            AuthError::Token(TokenError::Expired),
            AuthError::Token(TokenError::Malformed),
            AuthError::SessionNotFound,
            AuthError::SessionRevoked,
            AuthError::SessionMismatch,
        ] {
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED, "{err}");
        }
    }

    #[test]
    fn store_cancellation_is_preserved() {
        assert!(matches!(AuthError::from(StoreError::Cancelled), AuthError::Cancelled));
        assert!(matches!(
            AuthError::from(StoreError::Database("boom".into())),
            AuthError::Storage(_)
        ));
    }

    #[test]
    fn storage_failures_hide_their_detail() {
        let err = AuthError::from(StoreError::Database("relation \"sessions\" does not exist".into()));
        let (status, Json(body)): (StatusCode, Json<serde_json::Value>) = err.into();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Storage error");
    }

    #[test]
    fn invalid_credentials_message_is_generic() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid email or password");
    }
}
