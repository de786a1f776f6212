use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::modules::auth::application::ports::outgoing::{PasswordHasher, PasswordHasherError};

#[derive(Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Low-cost variant for tests; never use outside of them.
    pub fn fast() -> Self {
        Self { cost: 4 }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash(&self, plain: &str) -> Result<String, PasswordHasherError> {
        let plain = plain.to_string();
        let cost = self.cost;

        // bcrypt is CPU-bound; keep it off the async executor.
        tokio::task::spawn_blocking(move || hash(plain, cost))
            .await
            .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?
            .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))
    }

    async fn verify(&self, plain: &str, hashed: &str) -> Result<bool, PasswordHasherError> {
        let plain = plain.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || verify(plain, &hashed))
            .await
            .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?
            .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify_round_trip() {
        let hasher = BcryptHasher::fast();
        let hashed = hasher.hash("rahasia").await.unwrap();

        assert!(hasher.verify("rahasia", &hashed).await.unwrap());
        assert!(!hasher.verify("salah", &hashed).await.unwrap());
    }
}
