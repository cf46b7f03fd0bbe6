//! Contact repository trait. Every operation is scoped to an owner.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Contact, ContactFilter, ContactPatch};
use crate::errors::DomainError;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// One page of the owner's contacts, oldest first, with the total
    /// number of contacts matching the filter
    async fn list(
        &self,
        owner_id: Uuid,
        filter: ContactFilter,
    ) -> Result<(Vec<Contact>, u64), DomainError>;

    /// Find a contact; `None` when missing or owned by someone else
    async fn find(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError>;

    async fn create(&self, contact: Contact) -> Result<Contact, DomainError>;

    /// Apply `patch` and return the updated contact, `None` when not found
    async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        patch: ContactPatch,
    ) -> Result<Option<Contact>, DomainError>;

    /// Delete and return the removed contact, `None` when not found
    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError>;
}
