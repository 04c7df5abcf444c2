use std::sync::Arc;
use chrono::Utc;
use crate::domains::auth::models::{
    Claims, LoginRequest, LoginResponse, RenewAccessTokenResponse, Session, SessionState, Subject,
    TokenKind,
};
use crate::domains::auth::services::TokenService;
use crate::domains::users::models::UserResponse;
use crate::shared::config::AuthConfig;
use crate::shared::database::{SessionStore, UserStore};
use crate::shared::errors::{AuthError, StoreError, TokenError};
use crate::shared::utils::{verify_password, with_deadline};

// =====================================================
// SessionManager
// =====================================================
// 역할: 로그인 / 토큰 갱신 / 세션 무효화 / 로그아웃
//
// 세션 상태: Active -> Revoked (갱신 불가) 또는 Active -> Deleted (행 삭제)
// Revoked/Deleted에서 Active로 돌아가는 전이는 없음.
//
// 모든 저장소 호출은 with_deadline으로 감싸서
// 데드라인 초과 시 AuthError::Cancelled로 끝남.
// =====================================================

#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<dyn SessionStore>,
    users: Arc<dyn UserStore>,
    tokens: TokenService,
    config: AuthConfig,
}

impl SessionManager {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        users: Arc<dyn UserStore>,
        tokens: TokenService,
        config: AuthConfig,
    ) -> Self {
        Self {
            sessions,
            users,
            tokens,
            config,
        }
    }

    /// 로그인
    /// Login: check credentials, issue an access/refresh pair, persist a new session.
    ///
    /// 매 로그인마다 새 세션을 만듭니다 (기존 세션 재사용 없음).
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AuthError> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AuthError::MalformedRequest(
                "email and password are required".to_string(),
            ));
        }

        // 1. 이메일로 사용자 조회 (없으면 비밀번호 오류와 같은 응답)
        let user = match with_deadline(self.config.storage_timeout, self.users.get_by_email(&request.email)).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => return Err(AuthError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };

        // 2. 비밀번호 검증 (argon2, 상수 시간 비교)
        verify_password(&request.password, &user.password_hash)?;

        // 3. Refresh Token 먼저 발급 (jti = 세션 ID), 그 세션에 묶인 Access Token 발급
        let subject = Subject {
            user_id: user.id,
            email: user.email.clone(),
            is_admin: user.is_admin,
        };
        let refresh = self.tokens.issue_refresh(&subject, self.config.refresh_token_ttl)?;
        let access = self
            .tokens
            .issue_access(&subject, &refresh.claims.jti, self.config.access_token_ttl)?;

        // 4. 세션 저장
        let session = Session {
            id: refresh.claims.jti.clone(),
            user_email: user.email.clone(),
            refresh_token: refresh.token.clone(),
            is_revoked: false,
            expires_at: refresh.claims.expires_at(),
            created_at: Utc::now(),
        };
        let session = with_deadline(self.config.storage_timeout, self.sessions.create(session)).await?;

        tracing::info!(user_id = user.id, session_id = %session.id, "User logged in");

        Ok(LoginResponse {
            session_id: session.id,
            access_token: access.token,
            refresh_token: refresh.token,
            access_token_expires_at: access.claims.expires_at(),
            refresh_token_expires_at: refresh.claims.expires_at(),
            user: user.into(),
        })
    }

    /// Access Token 갱신
    /// Renew: exchange a valid refresh token for a fresh access token.
    ///
    /// 세션과 refresh token은 변경하지 않습니다. 새 access token의 만료는
    /// 항상 "지금" 기준으로 계산합니다.
    pub async fn renew(&self, refresh_token: &str) -> Result<RenewAccessTokenResponse, AuthError> {
        // 1. 서명 + 만료 검증
        let claims = self.tokens.verify(refresh_token)?;
        if claims.kind != TokenKind::Refresh {
            return Err(TokenError::WrongKind.into());
        }

        // 2. 세션 조회 (jti = 세션 ID)
        let session = self.session(&claims.jti).await?;

        // 3. 세션 상태 검사
        match session.state() {
            SessionState::Active => {}
            SessionState::Revoked => {
                tracing::warn!(session_id = %session.id, "Renewal rejected: session revoked");
                return Err(AuthError::SessionRevoked);
            }
        }
        if session.user_email != claims.email || session.refresh_token != refresh_token {
            tracing::warn!(session_id = %session.id, "Renewal rejected: session does not match token");
            return Err(AuthError::SessionMismatch);
        }

        // 4. 같은 주체로 새 Access Token 발급
        let access = self
            .tokens
            .issue_access(&claims.subject(), &session.id, self.config.access_token_ttl)?;

        tracing::debug!(session_id = %session.id, "Access token renewed");

        Ok(RenewAccessTokenResponse {
            access_token: access.token,
            access_token_expires_at: access.claims.expires_at(),
        })
    }

    /// 세션 무효화 (멱등)
    /// Revoke: block further renewals but keep the row for audit
    pub async fn revoke(&self, session_id: &str) -> Result<(), AuthError> {
        with_deadline(self.config.storage_timeout, self.sessions.revoke(session_id)).await?;
        tracing::info!(session_id = %session_id, "Session revoked");
        Ok(())
    }

    /// 로그아웃 (세션 행 삭제, 멱등)
    /// Logout: remove the session row. Deleting a missing session succeeds.
    pub async fn logout(&self, session_id: &str) -> Result<(), AuthError> {
        with_deadline(self.config.storage_timeout, self.sessions.delete(session_id)).await?;
        tracing::info!(session_id = %session_id, "Session deleted");
        Ok(())
    }

    /// 세션 조회
    pub async fn session(&self, session_id: &str) -> Result<Session, AuthError> {
        match with_deadline(self.config.storage_timeout, self.sessions.get(session_id)).await {
            Ok(session) => Ok(session),
            Err(StoreError::NotFound) => Err(AuthError::SessionNotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// 토큰의 사용자 정보 조회 (/me)
    /// Profile of the user behind an access token
    pub async fn current_user(&self, claims: &Claims) -> Result<UserResponse, AuthError> {
        match with_deadline(self.config.storage_timeout, self.users.get_by_id(claims.user_id)).await {
            Ok(user) => Ok(user.into()),
            Err(StoreError::NotFound) => Err(AuthError::UserNotFound { id: claims.user_id }),
            Err(e) => Err(e.into()),
        }
    }
}
