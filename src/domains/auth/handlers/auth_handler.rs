use crate::domains::auth::models::{
    LoginRequest, LoginResponse, RenewAccessTokenRequest, RenewAccessTokenResponse,
};
use crate::domains::users::models::UserResponse;
use crate::shared::services::AppState;
use crate::shared::errors::AuthError;
use axum::{extract::State, http::StatusCode, Json};
use crate::shared::middleware::auth::AuthenticatedUser;

// 로그인 핸들러
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Invalid email or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<serde_json::Value>)> {
    // Service 호출 (비밀번호 검증 + 토큰 발급 + 세션 저장)
    let response = app_state
        .auth_state
        .session_manager
        .login(request)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

/// Access Token 갱신 핸들러
/// Renew access token handler (refresh token in the body, no bearer needed)
#[utoipa::path(
    post,
    path = "/api/auth/token/renew",
    request_body = RenewAccessTokenRequest,
    responses(
        (status = 200, description = "Access token renewed", body = RenewAccessTokenResponse),
        (status = 401, description = "Invalid, expired, revoked or unknown refresh token"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn renew_access_token(
    State(app_state): State<AppState>,
    Json(request): Json<RenewAccessTokenRequest>,
) -> Result<Json<RenewAccessTokenResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .auth_state
        .session_manager
        .renew(&request.refresh_token)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

/// 세션 무효화 핸들러
/// Revoke the caller's session; the row is kept but can no longer renew
#[utoipa::path(
    post,
    path = "/api/auth/token/revoke",
    responses(
        (status = 204, description = "Session revoked"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn revoke_session(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .auth_state
        .session_manager
        .revoke(authenticated_user.session_id())
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}

/// 로그아웃 핸들러
/// Logout handler: deletes the caller's session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 204, description = "Logout successful"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn logout(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .auth_state
        .session_manager
        .logout(authenticated_user.session_id())
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "User info retrieved successfully", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn get_me(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<UserResponse>, (StatusCode, Json<serde_json::Value>)> {
    let user = app_state
        .auth_state
        .session_manager
        .current_user(&authenticated_user.claims)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(user))
}
