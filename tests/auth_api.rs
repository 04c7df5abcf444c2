// =====================================================
// 인증 / 세션 API 통합 테스트
// =====================================================

mod common;
use common::*;
use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use serde_json::json;

/// 테스트: 로그인 성공 시 토큰 두 개 + Active 세션 하나
#[tokio::test]
async fn test_login_creates_one_session() {
    let app = TestApp::new();
    app.seed_user("a@b.com", false).await;

    let body = app.login("a@b.com").await;

    assert!(body["access_token"].is_string());
    assert!(body["refresh_token"].is_string());
    assert_eq!(body["user"]["email"], "a@b.com");
    assert!(body.get("password_hash").is_none());
    assert_eq!(app.sessions.len(), 1);
}

/// 테스트: 잘못된 비밀번호 → 401, 세션 없음, 일반 메시지
#[tokio::test]
async fn test_wrong_password_is_generic_401() {
    let app = TestApp::new();
    app.seed_user("a@b.com", false).await;

    let (status, wrong_password) = app
        .post("/api/auth/login", None, json!({ "email": "a@b.com", "password": "wrong" }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, unknown_email) = app
        .post("/api/auth/login", None, json!({ "email": "x@b.com", "password": "secret" }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["error"], "Invalid email or password");
    assert!(app.sessions.is_empty());
}

/// 테스트: renew → revoke → renew 실패
#[tokio::test]
async fn test_renew_then_revoke() {
    let app = TestApp::new();
    app.seed_user("a@b.com", false).await;
    let login = app.login("a@b.com").await;
    let access = login["access_token"].as_str().unwrap();
    let refresh = login["refresh_token"].as_str().unwrap();

    let (status, renewed) = app
        .post("/api/auth/token/renew", None, json!({ "refresh_token": refresh }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(renewed["access_token"].is_string());

    let (status, _) = app.post("/api/auth/token/revoke", Some(access), json!({})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // 멱등
    let (status, _) = app.post("/api/auth/token/revoke", Some(access), json!({})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app
        .post("/api/auth/token/renew", None, json!({ "refresh_token": refresh }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Session revoked");

    // 이미 발급된 access token은 만료까지 유효 (게이트는 세션을 조회하지 않음)
    let (status, _) = app.get("/api/auth/me", Some(access)).await;
    assert_eq!(status, StatusCode::OK);
}

/// 테스트: logout은 세션 행을 삭제, 두 번 호출해도 성공
#[tokio::test]
async fn test_logout_deletes_session() {
    let app = TestApp::new();
    app.seed_user("a@b.com", false).await;
    let login = app.login("a@b.com").await;
    let access = login["access_token"].as_str().unwrap();
    let refresh = login["refresh_token"].as_str().unwrap();

    let (status, _) = app.post("/api/auth/logout", Some(access), json!({})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(app.sessions.is_empty());

    let (status, _) = app.post("/api/auth/logout", Some(access), json!({})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app
        .post("/api/auth/token/renew", None, json!({ "refresh_token": refresh }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Session not found");
}

/// 테스트: Authorization 헤더 형식 검사
#[tokio::test]
async fn test_bearer_header_shapes() {
    let app = TestApp::new();
    app.seed_user("a@b.com", false).await;
    let token = app.access_token("a@b.com").await;

    let (status, body) = app.get("/api/auth/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Missing authorization header");

    for value in [token.clone(), format!("Token {token}"), format!("Bearer {token} extra")] {
        let request = Request::builder()
            .uri("/api/auth/me")
            .header(header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap();
        let (status, _) = app.send_request(request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    let (status, body) = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "a@b.com");
}

/// 테스트: ASCII가 아닌 바이트가 섞인 헤더는 MalformedHeader
#[tokio::test]
async fn test_non_ascii_bearer_header_is_malformed() {
    let app = TestApp::new();
    app.seed_user("a@b.com", false).await;
    let token = app.access_token("a@b.com").await;

    let mut raw = format!("Bearer {token}").into_bytes();
    raw.extend_from_slice(b"\xe2\x9c\x93");
    let request = Request::builder()
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, HeaderValue::from_bytes(&raw).unwrap())
        .body(Body::empty())
        .unwrap();

    let (status, body) = app.send_request(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid authorization header. Expected: 'Bearer <token>'");
}

/// 테스트: 사용자 삭제 시 세션도 삭제되어 갱신 불가
#[tokio::test]
async fn test_renew_fails_after_user_is_deleted() {
    let app = TestApp::new();
    app.seed_user("admin@b.com", true).await;
    let user_id = app.seed_user("a@b.com", false).await;
    let admin = app.access_token("admin@b.com").await;
    let login = app.login("a@b.com").await;
    let refresh = login["refresh_token"].as_str().unwrap().to_string();

    let (status, _) = app.delete(&format!("/api/users/{user_id}"), Some(&admin)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.sessions.len(), 1);

    let (status, body) = app
        .post("/api/auth/token/renew", None, json!({ "refresh_token": refresh }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Session not found");
}

/// 테스트: 이메일 변경 후 이전 refresh token은 세션과 불일치
#[tokio::test]
async fn test_renew_after_email_change_is_a_mismatch() {
    let app = TestApp::new();
    app.seed_user("a@b.com", false).await;
    let login = app.login("a@b.com").await;
    let access = login["access_token"].as_str().unwrap().to_string();
    let refresh = login["refresh_token"].as_str().unwrap().to_string();
    let session_id = login["session_id"].as_str().unwrap().to_string();

    let (status, _) = app
        .patch("/api/users", Some(&access), json!({ "email": "new@b.com" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .post("/api/auth/token/renew", None, json!({ "refresh_token": refresh }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid session");

    // 새 이메일로 다시 로그인하면 정상
    let relogin = app.login("new@b.com").await;
    assert_ne!(relogin["session_id"].as_str().unwrap(), session_id);
}

/// 테스트: refresh token은 bearer로 쓸 수 없고, access token으로 갱신할 수 없음
#[tokio::test]
async fn test_token_kinds_are_not_interchangeable() {
    let app = TestApp::new();
    app.seed_user("a@b.com", false).await;
    let login = app.login("a@b.com").await;
    let access = login["access_token"].as_str().unwrap();
    let refresh = login["refresh_token"].as_str().unwrap();

    let (status, _) = app.get("/api/auth/me", Some(refresh)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .post("/api/auth/token/renew", None, json!({ "refresh_token": access }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// 테스트: 위조된 토큰 거부
#[tokio::test]
async fn test_forged_token_is_rejected() {
    let app = TestApp::new();
    app.seed_user("a@b.com", false).await;
    let token = app.access_token("a@b.com").await;

    // 서명 부분 변조
    let mut forged = token.clone();
    let last = forged.pop().unwrap();
    forged.push(if last == 'A' { 'B' } else { 'A' });

    let (status, _) = app.get("/api/auth/me", Some(&forged)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// 테스트: 관리자 전용 엔드포인트
#[tokio::test]
async fn test_admin_gate() {
    let app = TestApp::new();
    app.seed_user("admin@b.com", true).await;
    app.seed_user("user@b.com", false).await;
    let admin = app.access_token("admin@b.com").await;
    let user = app.access_token("user@b.com").await;

    let (status, body) = app.get("/api/users", Some(&user)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "User is not admin");

    let (status, body) = app.get("/api/users", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"].as_array().unwrap().len(), 2);
}

/// 테스트: 회원가입 → 로그인 → 본인 정보 수정
#[tokio::test]
async fn test_register_and_update_profile() {
    let app = TestApp::new();

    let (status, created) = app
        .post(
            "/api/users",
            None,
            json!({ "name": "Jane", "email": "jane@b.com", "password": "secret", "is_admin": true }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    // 비관리자의 자기 승격은 무시됨
    assert_eq!(created["is_admin"], false);

    let (status, _) = app
        .post("/api/users", None, json!({ "name": "J", "email": "jane@b.com", "password": "x" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let token = app.access_token("jane@b.com").await;
    let (status, updated) = app
        .patch("/api/users", Some(&token), json!({ "name": "Janet" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Janet");
    assert_eq!(updated["email"], "jane@b.com");
}

/// 테스트: OpenAPI 문서 제공
#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = TestApp::new();
    let (status, doc) = app.get("/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/auth/login"].is_object());
    assert!(doc["paths"]["/api/orders"].is_object());
}
