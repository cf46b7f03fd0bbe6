//! Mail delivery configuration

use serde::{Deserialize, Serialize};

/// Outbound mail settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Provider name: "sendgrid" or "mock"
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Provider API key
    #[serde(default)]
    pub api_key: String,

    /// Sender address for outgoing mail
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// Provider API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Maximum delivery attempts on transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff between attempts in milliseconds
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: String::new(),
            from_address: default_from_address(),
            api_base_url: default_api_base_url(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let api_key = std::env::var("SENDGRID_API_KEY").unwrap_or_default();
        let provider = std::env::var("MAIL_PROVIDER").unwrap_or_else(|_| {
            if api_key.is_empty() {
                default_provider()
            } else {
                String::from("sendgrid")
            }
        });

        Self {
            provider,
            api_key,
            from_address: std::env::var("MAIL_FROM").unwrap_or_else(|_| default_from_address()),
            ..Default::default()
        }
    }
}

fn default_provider() -> String {
    String::from("mock")
}

fn default_from_address() -> String {
    String::from("no-reply@phonebook.local")
}

fn default_api_base_url() -> String {
    String::from("https://api.sendgrid.com")
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    500
}

fn default_timeout() -> u64 {
    10
}
