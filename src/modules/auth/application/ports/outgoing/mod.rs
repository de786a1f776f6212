pub mod password_hasher;
pub mod token_provider;
pub mod user_repository;

pub use password_hasher::{PasswordHasher, PasswordHasherError};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_repository::{NewUser, UserRepository, UserRepositoryError};
