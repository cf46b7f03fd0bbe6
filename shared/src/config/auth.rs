//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "change-me-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Session token lifetime in seconds
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            token_expiry: default_token_expiry(),
            issuer: default_issuer(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

/// Authentication settings grouped under `[auth]`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt: JwtConfig,

    #[serde(default)]
    pub password: PasswordConfig,
}

fn default_token_expiry() -> i64 {
    23 * 3600
}

fn default_issuer() -> String {
    String::from("phonebook")
}

fn default_bcrypt_cost() -> u32 {
    10
}
