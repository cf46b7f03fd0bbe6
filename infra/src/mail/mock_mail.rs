//! Mock mail service for development and tests

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use pb_core::services::MailServiceTrait;
use pb_shared::utils::validation::{mask_email, mask_link_token};

use super::templates::{verification_email, EmailMessage};

/// Records outgoing mail instead of delivering it
#[derive(Debug, Default)]
pub struct MockMailService {
    counter: AtomicU64,
    simulate_failure: AtomicBool,
    outbox: Mutex<Vec<EmailMessage>>,
    last_link: Mutex<Option<String>>,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following send fail until switched off
    pub fn set_simulate_failure(&self, fail: bool) {
        self.simulate_failure.store(fail, Ordering::SeqCst);
    }

    /// Number of messages accepted so far
    pub fn sent_count(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Verification link of the most recent message
    pub fn last_verification_link(&self) -> Option<String> {
        self.last_link.lock().ok().and_then(|link| link.clone())
    }

    /// Token part of the most recent verification link
    pub fn last_verification_token(&self) -> Option<String> {
        self.last_verification_link()
            .and_then(|link| link.rsplit('/').next().map(str::to_string))
    }

    /// Copy of every accepted message
    pub fn outbox(&self) -> Vec<EmailMessage> {
        self.outbox
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send_verification_email(
        &self,
        to: &str,
        verification_link: &str,
    ) -> Result<String, String> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err("mock mail delivery failure".to_string());
        }

        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let message = verification_email(to, verification_link);

        info!(
            to = %mask_email(to),
            subject = %message.subject,
            link = %mask_link_token(verification_link),
            "Mock mail sent"
        );

        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(message);
        }
        if let Ok(mut last) = self.last_link.lock() {
            *last = Some(verification_link.to_string());
        }

        Ok(format!("mock-{}", id))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_sent_messages() {
        let service = MockMailService::new();

        let id = service
            .send_verification_email("kate@mail.com", "http://host/api/users/verify/tok-1")
            .await
            .unwrap();

        assert_eq!(id, "mock-1");
        assert_eq!(service.sent_count(), 1);
        assert_eq!(service.last_verification_token().as_deref(), Some("tok-1"));
        assert_eq!(service.outbox()[0].to, "kate@mail.com");
    }

    #[tokio::test]
    async fn simulated_failure_rejects_send() {
        let service = MockMailService::new();
        service.set_simulate_failure(true);

        let result = service
            .send_verification_email("kate@mail.com", "http://host/api/users/verify/x")
            .await;

        assert!(result.is_err());
        assert_eq!(service.sent_count(), 0);
        assert!(service.last_verification_link().is_none());

        service.set_simulate_failure(false);
        assert!(service
            .send_verification_email("kate@mail.com", "http://host/api/users/verify/y")
            .await
            .is_ok());
    }
}
