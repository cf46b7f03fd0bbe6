//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT and password hashing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Verification mail provider configuration
//! - `server` - HTTP server and CORS configuration
//! - `storage` - Public directory and avatar storage configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod mail;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig, PasswordConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::MailConfig;
pub use server::{CorsConfig, ServerConfig};
pub use storage::StorageConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Mail configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// Avatar storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            mail: MailConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Build configuration from plain environment variables only
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut server = ServerConfig::default();
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            server.port = port;
        }
        if let Ok(host) = std::env::var("HOST") {
            server.host = host;
        }
        if let Ok(base_url) = std::env::var("BASE_URL") {
            server = server.with_base_url(base_url);
        }

        let mut auth = AuthConfig::default();
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            auth.jwt.secret = secret;
        }
        if let Some(expiry) = std::env::var("JWT_EXPIRES_IN")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            auth.jwt.token_expiry = expiry;
        }

        let mut storage = StorageConfig::default();
        if let Ok(dir) = std::env::var("PUBLIC_DIR") {
            storage = storage.with_public_dir(dir);
        }

        Self {
            environment,
            server,
            cors: CorsConfig::default(),
            database: DatabaseConfig::from_env(),
            auth,
            mail: MailConfig::from_env(),
            storage,
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Layer `config.<env>.toml` and `APP__*` variables over the plain-env values
    pub fn load() -> Result<Self, config::ConfigError> {
        let base = Self::from_env();
        let file = base.environment.config_file();

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&base)?)
            .add_source(config::File::with_name(&file).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Reject settings the server must not start with
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let invalid = |message: &str| Err(config::ConfigError::Message(message.to_string()));

        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return invalid("JWT_SECRET must be set in production");
        }
        if !(4..=31).contains(&self.auth.password.bcrypt_cost) {
            return invalid("bcrypt cost must be between 4 and 31");
        }
        if self.auth.jwt.token_expiry <= 0 {
            return invalid("token expiry must be positive");
        }
        if self.storage.avatar_size == 0 {
            return invalid("avatar size must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_development_logging() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(!config.database.is_configured());
        assert_eq!(config.mail.provider, "mock");
    }

    #[test]
    fn validate_rejects_unsafe_settings() {
        assert!(AppConfig::default().validate().is_ok());

        let mut production = AppConfig::default();
        production.environment = Environment::Production;
        assert!(production.validate().is_err());
        production.auth.jwt = JwtConfig::new("a-real-production-secret");
        assert!(production.validate().is_ok());

        let mut weak = AppConfig::default();
        weak.auth.password.bcrypt_cost = 2;
        assert!(weak.validate().is_err());

        let mut no_avatar = AppConfig::default();
        no_avatar.storage.avatar_size = 0;
        assert!(no_avatar.validate().is_err());
    }

    #[test]
    fn config_round_trips_through_builder() {
        let base = AppConfig::default();
        let built = config::Config::builder()
            .add_source(config::Config::try_from(&base).unwrap())
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>()
            .unwrap();
        assert_eq!(built.server.port, base.server.port);
        assert_eq!(built.storage.avatar_size, 250);
    }
}
