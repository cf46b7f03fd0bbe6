//! Traits for mail delivery and avatar storage integration

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainResult;

/// Trait for mail service integration
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Send the address confirmation mail, returning the provider message id
    async fn send_verification_email(
        &self,
        to: &str,
        verification_link: &str,
    ) -> Result<String, String>;

    /// Provider name for logs
    fn provider_name(&self) -> &str;
}

/// An uploaded avatar image as received from the client
#[derive(Debug, Clone, Default)]
pub struct AvatarUpload {
    pub bytes: Vec<u8>,
    /// Original file name, used for its extension
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

impl AvatarUpload {
    /// Lower-cased extension of the original file name
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

/// Trait for avatar image storage
#[async_trait]
pub trait AvatarStorageTrait: Send + Sync {
    /// Normalize and persist the image, returning its public relative URL
    /// (for example `avatars/<user_id>.png`)
    async fn store_avatar(&self, user_id: Uuid, upload: AvatarUpload) -> DomainResult<String>;
}
