use std::str::FromStr;
use std::time::Duration;
use anyhow::{bail, Context, Result};

// 애플리케이션 설정
// Application configuration loaded from the environment (.env supported)

/// 인증 코어 설정
/// Settings handed to the auth core (token codec + session manager)
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 서명 키 (공유 비밀)
    pub jwt_secret: String,
    /// Access token 수명 (기본 15분)
    pub access_token_ttl: chrono::Duration,
    /// Refresh token 수명 (기본 24시간)
    pub refresh_token_ttl: chrono::Duration,
    /// 저장소 호출당 데드라인
    pub storage_timeout: Duration,
}

impl AuthConfig {
    pub const DEFAULT_ACCESS_TTL_MINS: i64 = 15;
    pub const DEFAULT_REFRESH_TTL_HOURS: i64 = 24;
    pub const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 5;

    /// 기본 수명으로 설정 생성 (테스트/데모용)
    /// Build a config with the default lifetimes
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            access_token_ttl: chrono::Duration::minutes(Self::DEFAULT_ACCESS_TTL_MINS),
            refresh_token_ttl: chrono::Duration::hours(Self::DEFAULT_REFRESH_TTL_HOURS),
            storage_timeout: Duration::from_secs(Self::DEFAULT_STORAGE_TIMEOUT_SECS),
        }
    }
}

/// 서버 전체 설정
///
/// | Env Var                        | Default                 |
/// |--------------------------------|-------------------------|
/// | `DATABASE_URL`                 | required                |
/// | `DATABASE_MAX_CONNECTIONS`     | `10`                    |
/// | `HOST`                         | `0.0.0.0`               |
/// | `PORT`                         | `3002`                  |
/// | `JWT_SECRET`                   | required                |
/// | `ACCESS_TOKEN_TTL_MINS`        | `15`                    |
/// | `REFRESH_TOKEN_TTL_HOURS`      | `24`                    |
/// | `STORAGE_TIMEOUT_SECS`         | `5`                     |
/// | `REQUEST_TIMEOUT_SECS`         | `30`                    |
/// | `SESSION_REAPER_INTERVAL_SECS` | `300` (`0` disables)    |
/// | `CORS_ORIGIN`                  | `http://localhost:3003` |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub auth: AuthConfig,
    pub request_timeout: Duration,
    pub session_reaper_interval: Option<Duration>,
    pub cors_origin: String,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let access_mins: i64 = parsed("ACCESS_TOKEN_TTL_MINS", AuthConfig::DEFAULT_ACCESS_TTL_MINS)?;
        let refresh_hours: i64 = parsed("REFRESH_TOKEN_TTL_HOURS", AuthConfig::DEFAULT_REFRESH_TTL_HOURS)?;
        if access_mins <= 0 || refresh_hours <= 0 {
            bail!("token lifetimes must be positive");
        }

        let storage_timeout_secs: u64 =
            parsed("STORAGE_TIMEOUT_SECS", AuthConfig::DEFAULT_STORAGE_TIMEOUT_SECS)?;
        let request_timeout_secs: u64 = parsed("REQUEST_TIMEOUT_SECS", 30)?;
        let reaper_secs: u64 = parsed("SESSION_REAPER_INTERVAL_SECS", 300)?;

        Ok(Self {
            database_url,
            database_max_connections: parsed("DATABASE_MAX_CONNECTIONS", 10)?,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parsed("PORT", 3002)?,
            auth: AuthConfig {
                jwt_secret,
                access_token_ttl: chrono::Duration::minutes(access_mins),
                refresh_token_ttl: chrono::Duration::hours(refresh_hours),
                storage_timeout: Duration::from_secs(storage_timeout_secs),
            },
            request_timeout: Duration::from_secs(request_timeout_secs),
            session_reaper_interval: (reaper_secs > 0).then(|| Duration::from_secs(reaper_secs)),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3003".to_string()),
        })
    }
}

fn required(key: &str) -> Result<String> {
    let value = std::env::var(key).with_context(|| format!("{key} must be set"))?;
    if value.trim().is_empty() {
        bail!("{key} must not be empty");
    }
    Ok(value)
}

fn parsed<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lifetimes() {
        let config = AuthConfig::with_secret("s");
        assert_eq!(config.access_token_ttl, chrono::Duration::minutes(15));
        assert_eq!(config.refresh_token_ttl, chrono::Duration::hours(24));
        assert_eq!(config.storage_timeout, Duration::from_secs(5));
    }

    #[test]
    fn unset_variable_falls_back_to_default() {
        let port: u16 = parsed("ECOM_API_TEST_UNSET_PORT", 4000).unwrap();
        assert_eq!(port, 4000);
    }
}
