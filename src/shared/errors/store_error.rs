use thiserror::Error;

/// 저장소 계층 에러
/// Storage-layer errors, shared by every store implementation
///
/// Postgres와 in-memory 구현 모두 이 타입을 반환합니다.
/// 쿼리 텍스트나 스키마 정보는 포함하지 않습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 레코드 없음
    /// Record not found
    #[error("Record not found")]
    NotFound,

    /// 유니크/외래키 제약 위반
    /// Unique or foreign key violation
    #[error("Conflicting record: {0}")]
    Conflict(String),

    /// CHECK 제약 위반
    /// Check constraint violation
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// 기타 데이터베이스 에러
    /// Any other database failure
    #[error("Database error: {0}")]
    Database(String),

    /// 데드라인 초과로 취소됨
    /// The call was abandoned because its deadline elapsed
    #[error("Storage call cancelled")]
    Cancelled,
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) => {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                // SQLSTATE class 23: integrity constraint violation
                match db_err.code().as_deref() {
                    Some("23505") | Some("23503") => StoreError::Conflict(constraint),
                    Some("23514") => StoreError::Constraint(constraint),
                    _ => StoreError::Database(db_err.message().to_string()),
                }
            }
            _ => StoreError::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert_eq!(StoreError::from(sqlx::Error::RowNotFound), StoreError::NotFound);
    }

    #[test]
    fn pool_timeout_is_a_database_error() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Database(_)));
    }
}
