//! In-memory implementation of ContactRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Contact, ContactFilter, ContactPatch};
use crate::errors::DomainError;

use super::repository::ContactRepository;

#[derive(Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Arc<RwLock<HashMap<Uuid, Contact>>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(
        &self,
        owner_id: Uuid,
        filter: ContactFilter,
    ) -> Result<(Vec<Contact>, u64), DomainError> {
        let contacts = self.contacts.read().await;
        let mut owned: Vec<Contact> = contacts
            .values()
            .filter(|c| c.owner_id == owner_id && filter.matches(c))
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let total = owned.len() as u64;
        let page = owned
            .into_iter()
            .skip(filter.pagination.offset() as usize)
            .take(filter.pagination.limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn find(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.get(&id).filter(|c| c.owner_id == owner_id).cloned())
    }

    async fn create(&self, contact: Contact) -> Result<Contact, DomainError> {
        let mut contacts = self.contacts.write().await;
        contacts.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        patch: ContactPatch,
    ) -> Result<Option<Contact>, DomainError> {
        let mut contacts = self.contacts.write().await;
        match contacts.get_mut(&id) {
            Some(contact) if contact.owner_id == owner_id => {
                contact.apply(patch);
                Ok(Some(contact.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError> {
        let mut contacts = self.contacts.write().await;
        let owned = contacts.get(&id).is_some_and(|c| c.owner_id == owner_id);
        Ok(if owned { contacts.remove(&id) } else { None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewContact;
    use pb_shared::types::Pagination;

    fn contact(owner: Uuid, name: &str, favorite: bool) -> Contact {
        Contact::new(
            owner,
            NewContact {
                name: name.to_string(),
                email: format!("{}@mail.com", name.to_lowercase()),
                phone: "(000) 111-2222".to_string(),
                favorite,
            },
        )
    }

    #[tokio::test]
    async fn list_is_scoped_filtered_and_paged() {
        let repo = InMemoryContactRepository::new();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        for (i, favorite) in [true, false, true, true].into_iter().enumerate() {
            repo.create(contact(owner, &format!("Name{}", i), favorite))
                .await
                .unwrap();
        }
        repo.create(contact(stranger, "Other", true)).await.unwrap();

        let (all, total) = repo.list(owner, ContactFilter::default()).await.unwrap();
        assert_eq!(total, 4);
        assert_eq!(all.len(), 4);

        let favorites = ContactFilter::new(Pagination::new(2, 2), Some(true));
        let (page, total) = repo.list(owner, favorites).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(page.len(), 1);
        assert!(page.iter().all(|c| c.favorite && c.owner_id == owner));
    }

    #[tokio::test]
    async fn other_owners_cannot_touch_contact() {
        let repo = InMemoryContactRepository::new();
        let owner = Uuid::new_v4();
        let intruder = Uuid::new_v4();
        let stored = repo.create(contact(owner, "Kate", false)).await.unwrap();

        assert!(repo.find(intruder, stored.id).await.unwrap().is_none());
        assert!(repo
            .update(intruder, stored.id, ContactPatch::default())
            .await
            .unwrap()
            .is_none());
        assert!(repo.delete(intruder, stored.id).await.unwrap().is_none());
        assert!(repo.find(owner, stored.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn update_then_delete() {
        let repo = InMemoryContactRepository::new();
        let owner = Uuid::new_v4();
        let stored = repo.create(contact(owner, "Kate", false)).await.unwrap();

        let updated = repo
            .update(
                owner,
                stored.id,
                ContactPatch {
                    favorite: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(updated.favorite);

        let removed = repo.delete(owner, stored.id).await.unwrap();
        assert_eq!(removed.map(|c| c.id), Some(stored.id));
        assert!(repo.find(owner, stored.id).await.unwrap().is_none());
    }
}
