/// 공유 유틸리티 모듈
/// Shared Utilities Module
///
/// 역할:
/// - 비밀번호 해싱/검증 (argon2)
/// - 저장소 호출 데드라인
pub mod deadline;
pub mod password;

pub use deadline::*;
pub use password::*;
