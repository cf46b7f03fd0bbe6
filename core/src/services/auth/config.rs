//! Configuration for the authentication service

use crate::services::password::DEFAULT_BCRYPT_COST;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt cost factor for new password hashes
    pub bcrypt_cost: u32,
    /// Public base URL that verification links point at
    pub base_url: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            base_url: String::from("http://localhost:3000"),
        }
    }
}

impl AuthServiceConfig {
    pub fn new(base_url: impl Into<String>, bcrypt_cost: u32) -> Self {
        Self {
            bcrypt_cost,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Link the user follows to confirm their address
    pub fn verification_link(&self, verification_token: &str) -> String {
        format!("{}/api/users/verify/{}", self.base_url, verification_token)
    }
}
