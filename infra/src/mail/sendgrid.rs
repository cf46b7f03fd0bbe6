//! SendGrid Mail Service Implementation
//!
//! Sends mail through the SendGrid v3 HTTP API with retry on rate limiting
//! and server errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::json;
use tracing::{debug, error, info, warn};

use pb_core::services::MailServiceTrait;
use pb_shared::config::MailConfig;
use pb_shared::utils::validation::{mask_email, mask_secret};

use super::templates::{verification_email, EmailMessage};
use crate::InfrastructureError;

/// SendGrid mail service implementation
pub struct SendGridMailService {
    client: Client,
    config: MailConfig,
}

impl SendGridMailService {
    /// Create a new SendGrid mail service
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "SENDGRID_API_KEY not set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        info!(
            api_key = %mask_secret(&config.api_key),
            "SendGrid mail service initialized with sender: {}",
            mask_email(&config.from_address)
        );

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/v3/mail/send", self.config.api_base_url.trim_end_matches('/'))
    }

    fn payload(&self, message: &EmailMessage) -> serde_json::Value {
        json!({
            "personalizations": [{ "to": [{ "email": message.to }] }],
            "from": { "email": self.config.from_address },
            "subject": message.subject,
            "content": [
                { "type": "text/plain", "value": message.text },
                { "type": "text/html", "value": message.html }
            ]
        })
    }

    /// Send with retry logic
    async fn send_with_retry(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let max_attempts = self.config.max_retries.max(1);
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);
        let mut attempts = 0;

        loop {
            attempts += 1;
            debug!(
                "Sending mail attempt {}/{} to {}",
                attempts,
                max_attempts,
                mask_email(&message.to)
            );

            let outcome = self
                .client
                .post(self.endpoint())
                .bearer_auth(&self.config.api_key)
                .json(&self.payload(message))
                .send()
                .await;

            let retryable = match outcome {
                Ok(response) if response.status().is_success() => {
                    let message_id = response
                        .headers()
                        .get("x-message-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("accepted")
                        .to_string();
                    info!(
                        "Mail sent successfully to {} with id: {}",
                        mask_email(&message.to),
                        message_id
                    );
                    return Ok(message_id);
                }
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    error!(
                        "SendGrid rejected mail (attempt {}/{}): {} {}",
                        attempts, max_attempts, status, body
                    );
                    if !is_retryable(status) {
                        return Err(InfrastructureError::Mail(format!(
                            "SendGrid returned {}",
                            status
                        )));
                    }
                    format!("SendGrid returned {}", status)
                }
                Err(e) => {
                    error!(
                        "Failed to reach SendGrid (attempt {}/{}): {}",
                        attempts, max_attempts, e
                    );
                    e.to_string()
                }
            };

            if attempts >= max_attempts {
                return Err(InfrastructureError::Mail(format!(
                    "Failed to send mail after {} attempts: {}",
                    attempts, retryable
                )));
            }

            warn!("Retrying mail delivery after {:?}", delay);
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

#[async_trait]
impl MailServiceTrait for SendGridMailService {
    async fn send_verification_email(
        &self,
        to: &str,
        verification_link: &str,
    ) -> Result<String, String> {
        let message = verification_email(to, verification_link);
        self.send_with_retry(&message)
            .await
            .map_err(|e| e.to_string())
    }

    fn provider_name(&self) -> &str {
        "sendgrid"
    }
}
