//! Owner-scoped contact operations

use std::sync::Arc;

use pb_shared::types::PaginatedResponse;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::{Contact, ContactFilter, ContactPatch, NewContact};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ContactRepository;

/// Contact book operations for an authenticated owner
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// One page of the owner's contacts
    pub async fn list(
        &self,
        owner_id: Uuid,
        filter: ContactFilter,
    ) -> DomainResult<PaginatedResponse<Contact>> {
        let (contacts, total) = self.repository.list(owner_id, filter).await?;
        debug!(
            owner_id = %owner_id,
            page = filter.pagination.page,
            returned = contacts.len(),
            total,
            "Listed contacts"
        );
        Ok(PaginatedResponse::new(contacts, filter.pagination, total))
    }

    /// # Errors
    ///
    /// * `DomainError::NotFound` - no such contact for this owner
    pub async fn get(&self, owner_id: Uuid, id: Uuid) -> DomainResult<Contact> {
        self.repository
            .find(owner_id, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn add(&self, owner_id: Uuid, fields: NewContact) -> DomainResult<Contact> {
        let contact = self.repository.create(Contact::new(owner_id, fields)).await?;
        info!(owner_id = %owner_id, contact_id = %contact.id, "Contact added");
        Ok(contact)
    }

    /// Delete a contact, returning what was removed
    pub async fn remove(&self, owner_id: Uuid, id: Uuid) -> DomainResult<Contact> {
        let removed = self
            .repository
            .delete(owner_id, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        info!(owner_id = %owner_id, contact_id = %id, "Contact deleted");
        Ok(removed)
    }

    pub async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        patch: ContactPatch,
    ) -> DomainResult<Contact> {
        self.repository
            .update(owner_id, id, patch)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update_favorite(
        &self,
        owner_id: Uuid,
        id: Uuid,
        favorite: bool,
    ) -> DomainResult<Contact> {
        let patch = ContactPatch {
            favorite: Some(favorite),
            ..Default::default()
        };
        self.update(owner_id, id, patch).await
    }
}

fn not_found(id: Uuid) -> DomainError {
    DomainError::not_found(format!("contact {}", id))
}
