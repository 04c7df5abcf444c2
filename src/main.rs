use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecom_api::domains::auth::services::SessionReaper;
use ecom_api::routes::create_router;
use ecom_api::shared::config::AppConfig;
use ecom_api::shared::database::{Database, PoolSettings, Stores};
use ecom_api::shared::services::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // 설정 로드 (.env 포함)
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecom_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // DB 연결 + 마이그레이션
    let pool = PoolSettings {
        max_connections: config.database_max_connections,
        acquire_timeout: config.auth.storage_timeout,
    };
    let db = Database::connect(&config.database_url, pool).await?;
    db.initialize().await?;

    // AppState 생성 (모든 Service 초기화)
    let stores = Stores::postgres(&db);
    let app_state = AppState::new(config.auth.clone(), stores.clone());

    // 만료 세션 정리 스케줄러
    let shutdown = CancellationToken::new();
    let reaper = config.session_reaper_interval.map(|interval| {
        tracing::info!(interval_secs = interval.as_secs(), "Session reaper enabled");
        SessionReaper::new(stores.sessions.clone(), interval, config.auth.storage_timeout)
            .start(shutdown.clone())
    });

    // CORS 설정
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .context("CORS_ORIGIN is not a valid header value")?,
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true);

    // Router 생성
    let app = create_router(app_state)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Server running on http://{addr}");
    tracing::info!("Swagger UI available at http://{addr}/swagger-ui");

    // 서버 실행 (Ctrl-C 시 종료)
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown.clone()))
        .await
        .context("Server error")?;

    shutdown.cancel();
    if let Some(handle) = reaper {
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "Session reaper task failed");
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
    shutdown.cancel();
}
