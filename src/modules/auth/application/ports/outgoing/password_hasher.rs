use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PasswordHasherError {
    #[error("Hashing failed: {0}")]
    HashingFailed(String),
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, plain: &str) -> Result<String, PasswordHasherError>;

    /// A mismatch is `Ok(false)`, not an error.
    async fn verify(&self, plain: &str, hash: &str) -> Result<bool, PasswordHasherError>;
}
