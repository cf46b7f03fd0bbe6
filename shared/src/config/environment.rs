//! Deployment environment and log output settings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the phonebook is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    /// Read `PHONEBOOK_ENV`, then `APP_ENV`; unknown or unset values mean development
    pub fn from_env() -> Self {
        ["PHONEBOOK_ENV", "APP_ENV"]
            .iter()
            .find_map(|key| std::env::var(key).ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Optional settings file layered over the defaults, e.g. `config.production.toml`
    pub fn config_file(&self) -> String {
        format!("config.{}.toml", self)
    }

    fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment '{}'", other)),
        }
    }
}

/// Log output settings handed to the tracing subscriber
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset, e.g. `info,sqlx=warn`
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Print file and line of each event
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    /// Human-readable debug output locally, JSON everywhere else
    pub fn for_environment(env: Environment) -> Self {
        let local = env == Environment::Development;
        Self {
            level: String::from(if local { "debug,sqlx=info" } else { "info,sqlx=warn" }),
            format: if local { LogFormat::Pretty } else { LogFormat::Json },
            source_location: local,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    #[default]
    Compact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_environment_aliases() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" Dev ".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Staging);
        assert!("qa".parse::<Environment>().is_err());
    }

    #[test]
    fn log_defaults_follow_environment() {
        let logging = LoggingConfig::for_environment(Environment::Production);
        assert_eq!(logging.format, LogFormat::Json);
        assert!(!logging.source_location);
        assert_eq!(LoggingConfig::default().format, LogFormat::Pretty);
        assert_eq!(Environment::Staging.config_file(), "config.staging.toml");
    }
}
