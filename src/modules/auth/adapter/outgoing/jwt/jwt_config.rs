use std::env;

/// Token-signing configuration, read once at startup and injected into
/// `JwtTokenService`. The secret never lives in a process-wide mutable.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Access token lifetime in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        // HS256 wants at least 32 bytes of key material.
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256");
        }

        let token_expiry = env::var("JWT_EXPIRY")
            .unwrap_or_else(|_| "7200".to_string())
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("Invalid JWT_EXPIRY value"));

        if token_expiry <= 0 || token_expiry > 86400 {
            panic!("JWT_EXPIRY must be between 1 and 86400 seconds");
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "alumni-backend".to_string());

        Self {
            secret_key,
            issuer,
            token_expiry,
        }
    }
}
