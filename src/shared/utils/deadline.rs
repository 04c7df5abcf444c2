use std::future::Future;
use std::time::Duration;
use crate::shared::errors::{StoreError, StoreResult};

/// 저장소 호출에 데드라인 적용
/// Run a storage call under a deadline
///
/// 시간이 초과되면 진행 중인 future를 drop하여 (sqlx 쿼리 중단)
/// `StoreError::Cancelled`를 반환합니다. 트랜잭션은 drop 시 롤백됩니다.
pub async fn with_deadline<T, F>(limit: Duration, fut: F) -> StoreResult<T>
where
    F: Future<Output = StoreResult<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(limit_ms = limit.as_millis() as u64, "Storage call exceeded its deadline");
            Err(StoreError::Cancelled)
        }
    }
}
