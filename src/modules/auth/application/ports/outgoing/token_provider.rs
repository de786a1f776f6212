use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;

/// Claims carried by an issued token. `sub` and `role` are what the
/// lifecycle engine acts on; `username` is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub username: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding failed: {0}")]
    EncodingError(String),
}

pub trait TokenProvider: Send + Sync {
    fn issue_token(&self, user_id: Uuid, username: &str, role: Role)
        -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
