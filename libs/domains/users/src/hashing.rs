//! One-way credential hashing with Argon2id.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{UserError, UserResult};

/// Hashes and verifies passwords.
///
/// Argon2 is deliberately slow, so both operations run on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashManager;

impl HashManager {
    pub fn new() -> Self {
        Self
    }

    /// Hash `password` with a fresh random salt (PHC string format).
    pub async fn hash(&self, password: &str) -> UserResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| UserError::Internal(format!("Hashing task failed: {}", e)))?
    }

    /// Check `password` against a stored hash.
    ///
    /// A hash that cannot be parsed is an internal error, not a mismatch.
    pub async fn compare(&self, password: &str, hash: &str) -> UserResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| UserError::Internal(format!("Hashing task failed: {}", e)))?
    }
}

fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::Internal(format!("Password hash error: {}", e)))
}

fn verify_password(password: &str, hash: &str) -> UserResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| UserError::Internal(format!("Password hash error: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_compare() {
        let hasher = HashManager::new();
        let hash = hasher.hash("abc").await.unwrap();

        assert_ne!(hash, "abc");
        assert!(hash.starts_with("$argon2"));
        assert!(hasher.compare("abc", &hash).await.unwrap());
        assert!(!hasher.compare("abd", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_gets_distinct_salts() {
        let hasher = HashManager::new();
        let first = hasher.hash("abc").await.unwrap();
        let second = hasher.hash("abc").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_compare_with_malformed_hash_is_internal_error() {
        let err = HashManager::new()
            .compare("abc", "not-a-phc-string")
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::Internal(_)));
    }
}
