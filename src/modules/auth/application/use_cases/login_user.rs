use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserRepository,
};

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown username and wrong password are indistinguishable to the
    /// caller; a missing user is an authorization failure, not a crash.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct LoggedInUser {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoggedInUser,
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError>;
}

pub struct LoginUserUseCase<R>
where
    R: UserRepository,
{
    users: R,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl<R> LoginUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(users: R, hasher: Arc<dyn PasswordHasher>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R> ILoginUserUseCase for LoginUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        let user = self
            .users
            .find_by_username(&request.username)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let valid = self
            .hasher
            .verify(&request.password, &user.password_hash)
            .await
            .map_err(|e| LoginError::VerificationFailed(e.to_string()))?;

        if !valid {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue_token(user.id, &user.username, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginResponse {
            token,
            user: LoggedInUser {
                id: user.id,
                username: user.username,
                role: user.role,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::auth::application::domain::entities::User;
    use crate::modules::auth::application::ports::outgoing::{
        NewUser, PasswordHasherError, TokenClaims, TokenError, UserRepositoryError,
    };

    struct StubUserRepo {
        user: Option<User>,
    }

    #[async_trait]
    impl UserRepository for StubUserRepo {
        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<User>, UserRepositoryError> {
            Ok(self.user.clone())
        }

        async fn insert(&self, _user: NewUser) -> Result<User, UserRepositoryError> {
            unimplemented!("not used")
        }
    }

    struct StubHasher {
        matches: bool,
    }

    #[async_trait]
    impl PasswordHasher for StubHasher {
        async fn hash(&self, _plain: &str) -> Result<String, PasswordHasherError> {
            unimplemented!("not used")
        }

        async fn verify(&self, _plain: &str, _hash: &str) -> Result<bool, PasswordHasherError> {
            Ok(self.matches)
        }
    }

    struct StubTokens;

    impl TokenProvider for StubTokens {
        fn issue_token(
            &self,
            _user_id: Uuid,
            _username: &str,
            _role: Role,
        ) -> Result<String, TokenError> {
            Ok("signed-token".to_string())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("not used")
        }
    }

    fn some_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "budi".to_string(),
            password_hash: "$2b$12$hash".to_string(),
            role: Role::User,
        }
    }

    fn request() -> LoginRequest {
        LoginRequest {
            username: "budi".to_string(),
            password: "rahasia".to_string(),
        }
    }

    #[tokio::test]
    async fn login_succeeds_with_matching_password() {
        let user = some_user();
        let expected_id = user.id;
        let uc = LoginUserUseCase::new(
            StubUserRepo { user: Some(user) },
            Arc::new(StubHasher { matches: true }),
            Arc::new(StubTokens),
        );

        let res = uc.execute(request()).await.unwrap();
        assert_eq!(res.token, "signed-token");
        assert_eq!(res.user.id, expected_id);
        assert_eq!(res.user.role, Role::User);
    }

    #[tokio::test]
    async fn unknown_user_is_invalid_credentials() {
        let uc = LoginUserUseCase::new(
            StubUserRepo { user: None },
            Arc::new(StubHasher { matches: true }),
            Arc::new(StubTokens),
        );

        let res = uc.execute(request()).await;
        assert!(matches!(res, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let uc = LoginUserUseCase::new(
            StubUserRepo {
                user: Some(some_user()),
            },
            Arc::new(StubHasher { matches: false }),
            Arc::new(StubTokens),
        );

        let res = uc.execute(request()).await;
        assert!(matches!(res, Err(LoginError::InvalidCredentials)));
    }
}
