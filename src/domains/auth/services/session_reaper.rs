use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use crate::shared::database::SessionStore;
use crate::shared::errors::StoreResult;
use crate::shared::utils::with_deadline;

/// 만료 세션 정리 스케줄러
/// Expired session reaper
///
/// 역할:
/// - 주기적으로 expires_at이 지난 세션 행을 삭제
/// - revoked 세션도 만료 전까지는 감사용으로 남겨둠
///
/// 처리 흐름:
/// 1. start() 시 백그라운드 태스크 실행
/// 2. interval마다 delete_expired(now) 호출
/// 3. CancellationToken이 취소되면 종료
#[derive(Clone)]
pub struct SessionReaper {
    sessions: Arc<dyn SessionStore>,
    interval: Duration,
    storage_timeout: Duration,
}

impl SessionReaper {
    pub fn new(sessions: Arc<dyn SessionStore>, interval: Duration, storage_timeout: Duration) -> Self {
        Self {
            sessions,
            interval,
            storage_timeout,
        }
    }

    /// 한 번 정리 실행, 삭제된 행 수 반환
    /// Run a single sweep
    pub async fn sweep(&self) -> StoreResult<u64> {
        with_deadline(self.storage_timeout, self.sessions.delete_expired(Utc::now())).await
    }

    /// 스케줄러 시작
    /// Start the background loop; it stops when `shutdown` is cancelled.
    pub fn start(self, shutdown: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        tracing::info!("Session reaper stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        match self.sweep().await {
                            Ok(0) => {}
                            Ok(removed) => tracing::debug!(removed, "Expired sessions removed"),
                            Err(e) => tracing::error!(error = %e, "Failed to remove expired sessions"),
                        }
                    }
                }
            }
        })
    }
}
