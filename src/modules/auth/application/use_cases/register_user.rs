use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<RegisteredUser, RegisterError>;
}

pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    users: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(users: R, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: RegisterRequest) -> Result<RegisteredUser, RegisterError> {
        let existing = self
            .users
            .find_by_username(&request.username)
            .await
            .map_err(|e| RegisterError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Err(RegisterError::UsernameTaken);
        }

        let password_hash = self
            .hasher
            .hash(&request.password)
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        // Self-registration never grants admin.
        let created = self
            .users
            .insert(NewUser {
                username: request.username,
                password_hash,
                role: Role::User,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameTaken => RegisterError::UsernameTaken,
                other => RegisterError::RepositoryError(other.to_string()),
            })?;

        Ok(RegisteredUser {
            id: created.id,
            username: created.username,
            role: created.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::auth::application::domain::entities::User;
    use crate::modules::auth::application::ports::outgoing::PasswordHasherError;
    use std::sync::Mutex;

    struct StubUserRepo {
        existing: Option<User>,
        inserted: Mutex<Option<NewUser>>,
    }

    #[async_trait]
    impl UserRepository for StubUserRepo {
        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<User>, UserRepositoryError> {
            Ok(self.existing.clone())
        }

        async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError> {
            let created = User {
                id: Uuid::new_v4(),
                username: user.username.clone(),
                password_hash: user.password_hash.clone(),
                role: user.role,
            };
            *self.inserted.lock().unwrap() = Some(user);
            Ok(created)
        }
    }

    struct StubHasher;

    #[async_trait]
    impl PasswordHasher for StubHasher {
        async fn hash(&self, plain: &str) -> Result<String, PasswordHasherError> {
            Ok(format!("hashed:{plain}"))
        }

        async fn verify(&self, _plain: &str, _hash: &str) -> Result<bool, PasswordHasherError> {
            unimplemented!("not used")
        }
    }

    #[tokio::test]
    async fn registers_with_user_role_and_hashed_password() {
        let repo = StubUserRepo {
            existing: None,
            inserted: Mutex::new(None),
        };
        let uc = RegisterUserUseCase::new(repo, Arc::new(StubHasher));

        let res = uc
            .execute(RegisterRequest {
                username: "siti".to_string(),
                password: "rahasia".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(res.username, "siti");
        assert_eq!(res.role, Role::User);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let repo = StubUserRepo {
            existing: Some(User {
                id: Uuid::new_v4(),
                username: "siti".to_string(),
                password_hash: "x".to_string(),
                role: Role::User,
            }),
            inserted: Mutex::new(None),
        };
        let uc = RegisterUserUseCase::new(repo, Arc::new(StubHasher));

        let res = uc
            .execute(RegisterRequest {
                username: "siti".to_string(),
                password: "rahasia".to_string(),
            })
            .await;

        assert!(matches!(res, Err(RegisterError::UsernameTaken)));
    }
}
