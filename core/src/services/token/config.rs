//! Configuration for the token service

use pb_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Issuer written to and required in every token
    pub issuer: String,
    /// Session token lifetime in seconds
    pub token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        JwtConfig::default().into()
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            issuer: config.issuer,
            token_expiry_seconds: config.token_expiry,
        }
    }
}
