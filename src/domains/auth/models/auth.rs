use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Utc};
use crate::domains::users::models::UserResponse;

// 로그인 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginRequest)]
pub struct LoginRequest {
    /// Email address
    /// 이메일 주소
    #[schema(example = "a@b.com")]
    pub email: String,

    /// Password
    /// 비밀번호
    #[schema(example = "secret")]
    pub password: String,
}

// 로그인 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginResponse)]
pub struct LoginResponse {
    /// 새 세션 ID (= refresh token의 jti)
    /// New session id
    pub session_id: String,

    /// JWT Access Token (짧은 수명)
    /// JWT Access Token (short lifetime)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// Refresh Token (긴 수명, 세션에 저장)
    /// Refresh Token (long lifetime, stored with the session)
    pub refresh_token: String,

    pub access_token_expires_at: DateTime<Utc>,
    pub refresh_token_expires_at: DateTime<Utc>,

    /// User information (without password)
    /// 사용자 정보 (비밀번호 제외)
    pub user: UserResponse,
}

// 토큰 갱신 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = RenewAccessTokenRequest)]
pub struct RenewAccessTokenRequest {
    /// Refresh Token
    /// 리프레시 토큰
    pub refresh_token: String,
}

// 토큰 갱신 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = RenewAccessTokenResponse)]
pub struct RenewAccessTokenResponse {
    /// 새 Access Token
    /// New Access Token
    pub access_token: String,
    pub access_token_expires_at: DateTime<Utc>,
}
