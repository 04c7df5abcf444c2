use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::{rand_core::OsRng, SaltString};
use crate::shared::errors::AuthError;

/// 비밀번호 해싱 (argon2, PHC 문자열)
/// Hash a password into a PHC string
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            AuthError::PasswordHashingFailed(e.to_string())
        })?
        .to_string();

    Ok(password_hash)
}

/// 비밀번호 검증
/// Verify a password against a stored hash
///
/// argon2 비교는 상수 시간으로 수행됩니다.
/// An unparsable stored hash is reported as `InvalidCredentials` so the caller
/// cannot tell a corrupt row from a wrong password.
pub fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(password_hash).map_err(|e| {
        tracing::error!(error = %e, "Stored password hash is not a valid PHC string");
        AuthError::InvalidCredentials
    })?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("secret").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("secret", &hash).is_ok());
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let hash = hash_password("secret").unwrap();
        assert_matches!(verify_password("wrong", &hash), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn garbage_hash_is_invalid_credentials() {
        assert_matches!(verify_password("secret", "not-a-hash"), Err(AuthError::InvalidCredentials));
    }
}
