use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use crate::domains::users::models::{CreateUserRequest, NewUser, UpdateUserRequest, UserResponse};
use crate::shared::database::UserStore;
use crate::shared::errors::{AuthError, StoreError};
use crate::shared::utils::{hash_password, with_deadline};

// 사용자 서비스
// UserService: registration and profile management
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    storage_timeout: Duration,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, storage_timeout: Duration) -> Self {
        Self { users, storage_timeout }
    }

    // 회원가입
    // `grant_admin`이 false면 요청의 is_admin은 무시됨 (관리자만 관리자 생성 가능)
    pub async fn register(
        &self,
        request: CreateUserRequest,
        grant_admin: bool,
    ) -> Result<UserResponse, AuthError> {
        let name = required("name", request.name)?;
        let email = required("email", request.email)?;
        if request.password.is_empty() {
            return Err(AuthError::MalformedRequest("password is required".to_string()));
        }

        let password_hash = hash_password(&request.password)?;
        let new_user = NewUser {
            name,
            email: email.clone(),
            password_hash,
            is_admin: grant_admin && request.is_admin,
        };

        let user = match with_deadline(self.storage_timeout, self.users.create(new_user)).await {
            Ok(user) => user,
            Err(StoreError::Conflict(_)) => return Err(AuthError::EmailAlreadyExists { email }),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user_id = user.id, is_admin = user.is_admin, "User registered");
        Ok(user.into())
    }

    pub async fn list(&self) -> Result<Vec<UserResponse>, AuthError> {
        let users = with_deadline(self.storage_timeout, self.users.list()).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    // 본인 정보 수정 (None 필드는 변경하지 않음, 관리자 플래그는 수정 불가)
    pub async fn update_self(
        &self,
        user_id: i64,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AuthError> {
        let mut user = match with_deadline(self.storage_timeout, self.users.get_by_id(user_id)).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => return Err(AuthError::UserNotFound { id: user_id }),
            Err(e) => return Err(e.into()),
        };

        if let Some(name) = request.name {
            user.name = required("name", name)?;
        }
        if let Some(email) = request.email {
            user.email = required("email", email)?;
        }
        if let Some(password) = request.password {
            if password.is_empty() {
                return Err(AuthError::MalformedRequest("password must not be empty".to_string()));
            }
            user.password_hash = hash_password(&password)?;
        }
        user.updated_at = Some(Utc::now());

        match with_deadline(self.storage_timeout, self.users.update(&user)).await {
            Ok(updated) => Ok(updated.into()),
            Err(StoreError::Conflict(_)) => Err(AuthError::EmailAlreadyExists { email: user.email }),
            Err(StoreError::NotFound) => Err(AuthError::UserNotFound { id: user_id }),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete(&self, user_id: i64) -> Result<(), AuthError> {
        match with_deadline(self.storage_timeout, self.users.delete(user_id)).await {
            Ok(()) => {
                tracing::info!(user_id, "User deleted");
                Ok(())
            }
            Err(StoreError::NotFound) => Err(AuthError::UserNotFound { id: user_id }),
            Err(e) => Err(e.into()),
        }
    }
}

fn required(field: &str, value: String) -> Result<String, AuthError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(AuthError::MalformedRequest(format!("{field} is required")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::shared::database::MemoryUserStore;
    use crate::shared::utils::verify_password;

    fn service() -> (UserService, Arc<MemoryUserStore>) {
        let store = Arc::new(MemoryUserStore::new());
        (UserService::new(store.clone(), Duration::from_secs(1)), store)
    }

    fn request(email: &str, is_admin: bool) -> CreateUserRequest {
        CreateUserRequest {
            name: "Jane".to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
            is_admin,
        }
    }

    #[tokio::test]
    async fn register_hashes_the_password() {
        let (service, store) = service();
        let created = service.register(request("a@b.com", false), false).await.unwrap();

        let stored = store.get_by_id(created.id).await.unwrap();
        assert_ne!(stored.password_hash, "secret");
        assert!(verify_password("secret", &stored.password_hash).is_ok());
    }

    #[tokio::test]
    async fn admin_flag_requires_an_admin_caller() {
        let (service, _) = service();
        let self_made = service.register(request("a@b.com", true), false).await.unwrap();
        let granted = service.register(request("b@b.com", true), true).await.unwrap();

        assert!(!self_made.is_admin);
        assert!(granted.is_admin);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let (service, _) = service();
        service.register(request("a@b.com", false), false).await.unwrap();

        assert_matches!(
            service.register(request("a@b.com", false), false).await,
            Err(AuthError::EmailAlreadyExists { .. })
        );
    }

    #[tokio::test]
    async fn update_leaves_absent_fields_alone() {
        let (service, store) = service();
        let created = service.register(request("a@b.com", false), false).await.unwrap();
        let before = store.get_by_id(created.id).await.unwrap();

        let updated = service
            .update_self(
                created.id,
                UpdateUserRequest {
                    name: Some("Janet".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let after = store.get_by_id(created.id).await.unwrap();
        assert_eq!(updated.name, "Janet");
        assert_eq!(after.email, before.email);
        assert_eq!(after.password_hash, before.password_hash);
        assert!(after.updated_at.is_some());
    }

    #[tokio::test]
    async fn update_rejects_blank_values() {
        let (service, _) = service();
        let created = service.register(request("a@b.com", false), false).await.unwrap();

        let blank_email = UpdateUserRequest {
            email: Some("  ".to_string()),
            ..Default::default()
        };
        assert_matches!(
            service.update_self(created.id, blank_email).await,
            Err(AuthError::MalformedRequest(_))
        );
    }

    #[tokio::test]
    async fn delete_missing_user_is_not_found() {
        let (service, _) = service();
        assert_matches!(service.delete(99).await, Err(AuthError::UserNotFound { id: 99 }));
    }
}
