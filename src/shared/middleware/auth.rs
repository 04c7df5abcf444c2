use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    Json,
};
use crate::domains::auth::models::Claims;
use crate::shared::errors::AuthError;
use crate::shared::services::AppState;

/// 인증된 사용자 정보 (Access Token에서 추출)
/// Authenticated caller, carrying the verified access-token claims
///
/// 세션 저장소는 조회하지 않습니다. 서명과 만료만 확인하므로
/// 세션이 revoke되어도 이미 발급된 access token은 만료까지 유효합니다.
///
/// 사용법:
/// ```rust,ignore
/// pub async fn my_orders(
///     State(app_state): State<AppState>,
///     user: AuthenticatedUser,  // <- 이렇게 사용!
/// ) -> Result<...> {
///     let user_id = user.claims.user_id;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: Claims,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> i64 {
        self.claims.user_id
    }

    /// 이 토큰이 속한 세션 ID
    pub fn session_id(&self) -> &str {
        &self.claims.sid
    }
}

/// 관리자 전용 (is_admin이 false면 Forbidden)
/// Admin-only variant of [`AuthenticatedUser`]
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

/// "Bearer <token>" 헤더에서 토큰 추출
/// Extract the token from an exact two-part `Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers.get(AUTHORIZATION).ok_or(AuthError::MissingHeader)?;
    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 토큰 추출
        let token = bearer_token(&parts.headers)?;

        // 2. Access Token 검증 (refresh token은 거부)
        let claims = state
            .auth_state
            .token_service
            .verify_access(token)
            .map_err(AuthError::from)?;

        Ok(AuthenticatedUser { claims })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = AuthenticatedUser::from_request_parts(parts, state).await?;
        if !user.claims.is_admin {
            return Err(AuthError::Forbidden.into());
        }
        Ok(AdminUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn accepts_exact_bearer_form() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_header() {
        assert_matches!(bearer_token(&HeaderMap::new()), Err(AuthError::MissingHeader));
    }

    #[test]
    fn rejects_other_shapes() {
        for value in ["Bearer", "abc.def.ghi", "Basic abc", "Bearer a b", "bearer abc", ""] {
            assert_matches!(
                bearer_token(&headers(value)),
                Err(AuthError::MalformedHeader),
                "{value:?} should be rejected"
            );
        }
    }
}
