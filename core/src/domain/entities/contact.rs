//! Contact entity: one phonebook entry owned by a user.

use chrono::{DateTime, Utc};
use pb_shared::types::Pagination;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A phonebook entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,

    /// Owning user
    pub owner_id: Uuid,

    pub name: String,
    pub email: String,
    pub phone: String,

    /// Marked as favorite by the owner
    pub favorite: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a contact that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub favorite: bool,
}

/// Partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub favorite: Option<bool>,
}

impl ContactPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.favorite.is_none()
    }
}

impl Contact {
    pub fn new(owner_id: Uuid, fields: NewContact) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            favorite: fields.favorite,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the provided fields of `patch`
    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(favorite) = patch.favorite {
            self.favorite = favorite;
        }
        self.updated_at = Utc::now();
    }

    pub fn set_favorite(&mut self, favorite: bool) {
        self.favorite = favorite;
        self.updated_at = Utc::now();
    }
}

/// Listing filter: pagination plus optional favorite flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactFilter {
    pub pagination: Pagination,
    pub favorite: Option<bool>,
}

impl ContactFilter {
    pub fn new(pagination: Pagination, favorite: Option<bool>) -> Self {
        Self { pagination, favorite }
    }

    /// Whether `contact` passes the favorite constraint
    pub fn matches(&self, contact: &Contact) -> bool {
        self.favorite.map_or(true, |f| contact.favorite == f)
    }
}
