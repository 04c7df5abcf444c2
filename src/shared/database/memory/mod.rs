// In-process store implementations
// 테스트용. Postgres 스키마와 같은 제약과 CASCADE를 적용합니다.
pub mod session_store;
pub mod user_store;
pub mod order_store;
pub mod product_store;

pub use session_store::*;
pub use user_store::*;
pub use order_store::*;
pub use product_store::*;
