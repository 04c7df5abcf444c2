// Auth domain state
// 인증 도메인 상태
use std::sync::Arc;
use crate::domains::auth::services::{SessionManager, TokenService};
use crate::shared::config::AuthConfig;
use crate::shared::database::Stores;

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub session_manager: Arc<SessionManager>,
    pub token_service: TokenService,
}

impl AuthState {
    /// Create AuthState from the auth config and stores
    /// AuthState 생성 (토큰 서비스는 세션 매니저와 게이트가 공유)
    pub fn new(config: AuthConfig, stores: &Stores) -> Self {
        let token_service = TokenService::new(&config.jwt_secret);
        let session_manager = SessionManager::new(
            stores.sessions.clone(),
            stores.users.clone(),
            token_service.clone(),
            config,
        );

        Self {
            session_manager: Arc::new(session_manager),
            token_service,
        }
    }
}
