use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{Role, User};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `Ok(None)` when no such user exists; a missing user is not a
    /// store failure.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError>;

    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError>;
}
