use async_trait::async_trait;
use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use chrono::{DateTime, Utc};
use crate::domains::auth::models::Session;
use crate::shared::errors::StoreResult;

/// 세션 저장소 계약
/// Session store contract. The session manager depends only on this trait.
///
/// - `create`: 새 세션 저장 (id 중복 시 `Conflict`)
/// - `get`: 없으면 `NotFound`
/// - `revoke`: revoked 플래그 설정, 이미 revoked/없는 세션도 성공
/// - `delete`: 행 삭제, 없는 세션도 성공 (멱등)
/// - `delete_expired`: 만료된 세션 정리, 삭제된 행 수 반환
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, session: Session) -> StoreResult<Session>;

    async fn get(&self, id: &str) -> StoreResult<Session>;

    async fn revoke(&self, id: &str) -> StoreResult<()>;

    async fn delete(&self, id: &str) -> StoreResult<()>;

    async fn delete_expired(&self, now: DateTime<Utc>) -> StoreResult<u64>;
}

/// Session Repository (PostgreSQL)
/// 세션 데이터베이스 작업 처리
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_session(row: &PgRow) -> Session {
        Session {
            id: row.get("id"),
            user_email: row.get("user_email"),
            refresh_token: row.get("refresh_token"),
            is_revoked: row.get("is_revoked"),
            expires_at: row.get("expires_at"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    /// 세션 생성 (저장)
    /// Create and store session
    async fn create(&self, session: Session) -> StoreResult<Session> {
        let row = sqlx::query(
            r#"
            INSERT INTO sessions (id, user_email, refresh_token, is_revoked, expires_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_email, refresh_token, is_revoked, expires_at, created_at
            "#,
        )
        .bind(&session.id)
        .bind(&session.user_email)
        .bind(&session.refresh_token)
        .bind(session.is_revoked)
        .bind(session.expires_at)
        .bind(session.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::row_to_session(&row))
    }

    /// 세션 조회 (id로)
    /// Find session by id
    async fn get(&self, id: &str) -> StoreResult<Session> {
        let row = sqlx::query(
            r#"
            SELECT id, user_email, refresh_token, is_revoked, expires_at, created_at
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::row_to_session(&row))
    }

    /// 세션 무효화 (is_revoked = true)
    /// Revoke session
    async fn revoke(&self, id: &str) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE sessions
            SET is_revoked = TRUE
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 세션 삭제 (로그아웃)
    /// Delete session
    async fn delete(&self, id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// 만료된 세션 삭제 (정리 작업)
    /// Delete expired sessions (cleanup)
    async fn delete_expired(&self, now: DateTime<Utc>) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
