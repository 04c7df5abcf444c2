// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 메모리 저장소 위에 AppState + Router를 만들고
// tower::ServiceExt::oneshot으로 요청을 보냄 (DB 불필요)
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let app = TestApp::new();
//     let (status, body) = app.post("/api/auth/login", None, json!({...})).await;
// }
// ```
// =====================================================
#![allow(dead_code)]

use std::sync::Arc;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use ecom_api::domains::users::models::NewUser;
use ecom_api::routes::create_router;
use ecom_api::shared::config::AuthConfig;
use ecom_api::shared::database::{
    MemoryOrderStore, MemoryProductStore, MemorySessionStore, MemoryUserStore, Stores, UserStore,
};
use ecom_api::shared::services::AppState;
use ecom_api::shared::utils::hash_password;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";
pub const PASSWORD: &str = "secret";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub users: Arc<MemoryUserStore>,
    pub sessions: Arc<MemorySessionStore>,
    pub orders: Arc<MemoryOrderStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let sessions = Arc::new(MemorySessionStore::new());
        let orders = Arc::new(MemoryOrderStore::new());
        let users = Arc::new(MemoryUserStore::with_cascade(sessions.clone(), orders.clone()));
        let stores = Stores {
            sessions: sessions.clone(),
            users: users.clone(),
            orders: orders.clone(),
            products: Arc::new(MemoryProductStore::new()),
        };

        let state = AppState::new(AuthConfig::with_secret(TEST_JWT_SECRET), stores);
        Self {
            router: create_router(state.clone()),
            state,
            users,
            sessions,
            orders,
        }
    }

    /// 저장소에 직접 사용자 생성 (관리자 부트스트랩용), id 반환
    pub async fn seed_user(&self, email: &str, is_admin: bool) -> i64 {
        self.users
            .create(NewUser {
                name: "Test User".to_string(),
                email: email.to_string(),
                password_hash: hash_password(PASSWORD).unwrap(),
                is_admin,
            })
            .await
            .unwrap()
            .id
    }

    /// 로그인 후 응답 본문 반환
    pub async fn login(&self, email: &str) -> Value {
        let (status, body) = self
            .post("/api/auth/login", None, json!({ "email": email, "password": PASSWORD }))
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body
    }

    /// 로그인 후 access token만 반환
    pub async fn access_token(&self, email: &str) -> String {
        self.login(email).await["access_token"].as_str().unwrap().to_string()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, token, None).await
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }
}

/// 주문 생성 요청 본문
pub fn order_body(quantities: &[i64]) -> Value {
    let items: Vec<Value> = quantities
        .iter()
        .enumerate()
        .map(|(i, q)| {
            json!({
                "name": format!("Item {i}"),
                "quantity": q,
                "image": "",
                "price": "9.99",
                "product_id": i as i64 + 1
            })
        })
        .collect();

    json!({
        "payment_method": "card",
        "tax_price": "0.00",
        "shipping_price": "0.00",
        "total_price": "19.98",
        "items": items
    })
}
