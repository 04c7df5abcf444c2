use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Utc};

/// 사용자 모델 (DB 저장용)
/// User row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// 사용자 생성 데이터 (해시된 비밀번호)
/// Insert payload; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

// 회원가입 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateUserRequest)]
pub struct CreateUserRequest {
    #[schema(example = "Jane")]
    pub name: String,

    /// Email address
    /// 이메일 주소
    #[schema(example = "a@b.com")]
    pub email: String,

    /// Password (will be hashed)
    /// 비밀번호 (해싱됨)
    #[schema(example = "secret")]
    pub password: String,

    #[serde(default)]
    pub is_admin: bool,
}

/// 사용자 정보 수정 요청 (부분 수정)
/// Partial update: `None` leaves a field unchanged
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[schema(as = UpdateUserRequest)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// 사용자 응답 (비밀번호 제외)
/// User information (without password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = UserResponse)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            is_admin: user.is_admin,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = ListUsersResponse)]
pub struct ListUsersResponse {
    pub users: Vec<UserResponse>,
}
