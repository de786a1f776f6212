use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_token(
        &self,
        user_id: Uuid,
        username: &str,
        role: Role,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.token_expiry);

        let claims = TokenClaims {
            sub: user_id,
            username: username.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;

        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(
            |e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Token verification failed: malformed token");
                        TokenError::MalformedToken
                    }
                }
            },
        )?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: "0123456789abcdef0123456789abcdef".to_string(),
            issuer: "test".to_string(),
            token_expiry: 7200,
        })
    }

    #[test]
    fn issued_token_verifies_and_carries_identity() {
        let svc = test_service();
        let id = Uuid::new_v4();

        let token = svc.issue_token(id, "budi", Role::Admin).unwrap();
        let claims = svc.verify_token(&token).unwrap();

        assert_eq!(claims.sub, id);
        assert_eq!(claims.username, "budi");
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_signed_with_other_key_is_rejected() {
        let svc = test_service();
        let other = JwtTokenService::new(JwtConfig {
            secret_key: "ffffffffffffffffffffffffffffffff".to_string(),
            issuer: "test".to_string(),
            token_expiry: 7200,
        });

        let token = other.issue_token(Uuid::new_v4(), "eve", Role::User).unwrap();
        let res = svc.verify_token(&token);
        assert!(matches!(res, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn garbage_is_malformed() {
        let svc = test_service();
        assert!(matches!(
            svc.verify_token("not-a-jwt"),
            Err(TokenError::MalformedToken)
        ));
    }
}
