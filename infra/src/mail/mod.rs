//! Mail Service Module
//!
//! Outbound mail for address verification. A SendGrid client covers
//! production delivery and a mock provider records messages for
//! development and tests.

use std::sync::Arc;

use pb_core::services::MailServiceTrait;
use pb_shared::config::MailConfig;

pub mod mock_mail;
pub mod sendgrid;
pub mod templates;

pub use mock_mail::MockMailService;
pub use sendgrid::SendGridMailService;
pub use templates::{verification_email, EmailMessage};

/// Create a mail service based on configuration
///
/// Unknown providers and SendGrid without an API key fall back to the
/// mock implementation.
pub fn create_mail_service(config: &MailConfig) -> Arc<dyn MailServiceTrait> {
    match config.provider.as_str() {
        "mock" => Arc::new(MockMailService::new()),
        "sendgrid" => match SendGridMailService::new(config.clone()) {
            Ok(service) => Arc::new(service),
            Err(e) => {
                tracing::error!("Failed to initialize SendGrid mail service: {}", e);
                tracing::warn!("Falling back to mock mail service");
                Arc::new(MockMailService::new())
            }
        },
        other => {
            tracing::warn!("Unknown mail provider '{}', using mock implementation", other);
            Arc::new(MockMailService::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_provider_is_default() {
        let service = create_mail_service(&MailConfig::default());
        assert_eq!(service.provider_name(), "mock");
    }

    #[test]
    fn sendgrid_without_key_falls_back_to_mock() {
        let config = MailConfig {
            provider: "sendgrid".to_string(),
            ..Default::default()
        };
        assert_eq!(create_mail_service(&config).provider_name(), "mock");
    }

    #[test]
    fn sendgrid_with_key_is_selected() {
        let config = MailConfig {
            provider: "sendgrid".to_string(),
            api_key: "SG.test".to_string(),
            ..Default::default()
        };
        assert_eq!(create_mail_service(&config).provider_name(), "sendgrid");
    }

    #[test]
    fn unknown_provider_falls_back_to_mock() {
        let config = MailConfig {
            provider: "carrier-pigeon".to_string(),
            ..Default::default()
        };
        assert_eq!(create_mail_service(&config).provider_name(), "mock");
    }
}
