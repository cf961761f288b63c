use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PasswordHashError, PasswordHash,
        PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::shared::AppError;

/// One-way salted password hashing with a matching verify primitive
#[async_trait]
pub trait PasswordHasher {
    /// Hashes a password with a fresh salt. Two calls on the same input
    /// produce different digests.
    async fn hash(&self, password: &str) -> Result<String, AppError>;

    /// Checks a password against a stored digest. A mismatch is `Ok(false)`;
    /// only an unreadable digest is an error.
    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AppError>;
}

/// Argon2id hasher producing PHC strings (`$argon2id$v=19$...`)
///
/// Hashing is CPU-bound, so both operations run on the blocking pool.
#[derive(Clone, Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    /// Creates a hasher with the argon2 crate's default cost parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hasher with explicit memory (KiB), iteration and lane costs
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self, AppError> {
        let params = Params::new(m_cost, t_cost, p_cost, None)
            .map_err(|e| AppError::HashingError(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    #[instrument(skip_all)]
    async fn hash(&self, password: &str) -> Result<String, AppError> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();

        let digest = tokio::task::spawn_blocking(move || -> Result<String, PasswordHashError> {
            let salt = SaltString::generate(&mut OsRng);
            let hash = argon2.hash_password(password.as_bytes(), &salt)?.to_string();
            Ok(hash)
        })
        .await
        .map_err(|e| AppError::HashingError(e.to_string()))?
        .map_err(|e| AppError::HashingError(e.to_string()))?;

        debug!("Password hashed");
        Ok(digest)
    }

    #[instrument(skip_all)]
    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AppError> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();

        let matches = tokio::task::spawn_blocking(move || -> Result<bool, PasswordHashError> {
            let parsed = PasswordHash::new(&password_hash)?;
            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(|e| AppError::HashingError(e.to_string()))?
        .map_err(|e| AppError::HashingError(e.to_string()))?;

        debug!(matches, "Password verified");
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> Argon2Hasher {
        Argon2Hasher::with_params(8, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_hash_is_not_plaintext() {
        let digest = hasher().hash("pw123").await.unwrap();

        assert!(digest.starts_with("$argon2id$"));
        assert!(!digest.contains("pw123"));
    }

    #[tokio::test]
    async fn test_hash_is_salted() {
        let hasher = hasher();
        let first = hasher.hash("pw123").await.unwrap();
        let second = hasher.hash("pw123").await.unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("pw123", &first).await.unwrap());
        assert!(hasher.verify("pw123", &second).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_wrong_password() {
        let hasher = hasher();
        let digest = hasher.hash("pw123").await.unwrap();

        assert!(!hasher.verify("wrong", &digest).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_malformed_digest_is_error() {
        let result = hasher().verify("pw123", "not-a-phc-string").await;

        assert!(matches!(result, Err(AppError::HashingError(_))));
    }

    #[tokio::test]
    async fn test_default_params_verify_cheap_digest() {
        // Parameters travel inside the digest, so any instance can verify it
        let digest = hasher().hash("pw123").await.unwrap();

        assert!(Argon2Hasher::new().verify("pw123", &digest).await.unwrap());
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert!(matches!(
            Argon2Hasher::with_params(0, 0, 0),
            Err(AppError::HashingError(_))
        ));
    }
}
