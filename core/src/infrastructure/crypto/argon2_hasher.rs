use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, crypto::ports::HasherRepository};

#[derive(Debug, Clone, Default)]
pub struct Argon2HasherRepository;

impl Argon2HasherRepository {
    pub fn new() -> Self {
        Self
    }
}

impl HasherRepository for Argon2HasherRepository {
    async fn hash_password(&self, password: String) -> Result<String, CoreError> {
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);

            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| {
                    error!("Failed to hash password: {}", e);
                    CoreError::InternalServerError
                })
        })
        .await
        .map_err(|e| {
            error!("Password hashing task failed: {}", e);
            CoreError::InternalServerError
        })?
    }

    async fn verify_password(
        &self,
        password: String,
        password_hash: String,
    ) -> Result<bool, CoreError> {
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&password_hash).map_err(|e| {
                error!("Stored password hash is malformed: {}", e);
                CoreError::InternalServerError
            })?;

            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|e| {
            error!("Password verification task failed: {}", e);
            CoreError::InternalServerError
        })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hasher = Argon2HasherRepository::new();

        let hash = hasher.hash_password("s3cret!".to_string()).await.unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(
            hasher
                .verify_password("s3cret!".to_string(), hash.clone())
                .await
                .unwrap()
        );
        assert!(
            !hasher
                .verify_password("wrong".to_string(), hash)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let hasher = Argon2HasherRepository::new();

        let result = hasher
            .verify_password("s3cret!".to_string(), "not-a-hash".to_string())
            .await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }
}
