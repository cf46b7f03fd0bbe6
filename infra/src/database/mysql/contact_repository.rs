//! MySQL implementation of the ContactRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pb_core::domain::entities::{Contact, ContactFilter, ContactPatch};
use pb_core::errors::DomainError;
use pb_core::repositories::ContactRepository;

use super::db_error;

/// MySQL implementation of ContactRepository
pub struct MySqlContactRepository {
    pool: MySqlPool,
}

impl MySqlContactRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_contact(row: &sqlx::mysql::MySqlRow) -> Result<Contact, DomainError> {
        let column = |name: &str, e: sqlx::Error| {
            DomainError::internal(format!("Failed to get {}: {}", name, e))
        };
        let uuid = |name: &str, value: String| {
            Uuid::parse_str(&value)
                .map_err(|e| DomainError::internal(format!("Invalid {} UUID: {}", name, e)))
        };

        Ok(Contact {
            id: uuid("id", row.try_get("id").map_err(|e| column("id", e))?)?,
            owner_id: uuid(
                "owner_id",
                row.try_get("owner_id").map_err(|e| column("owner_id", e))?,
            )?,
            name: row.try_get("name").map_err(|e| column("name", e))?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            phone: row.try_get("phone").map_err(|e| column("phone", e))?,
            favorite: row.try_get("favorite").map_err(|e| column("favorite", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
        })
    }
}

#[async_trait]
impl ContactRepository for MySqlContactRepository {
    async fn list(
        &self,
        owner_id: Uuid,
        filter: ContactFilter,
    ) -> Result<(Vec<Contact>, u64), DomainError> {
        let owner = owner_id.to_string();

        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, name, email, phone, favorite, created_at, updated_at
            FROM contacts
            WHERE owner_id = ? AND (? IS NULL OR favorite = ?)
            ORDER BY created_at, id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(&owner)
        .bind(filter.favorite)
        .bind(filter.favorite)
        .bind(filter.pagination.limit_i64())
        .bind(filter.pagination.offset_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list contacts", e))?;

        let total_row = sqlx::query(
            "SELECT COUNT(*) AS total FROM contacts WHERE owner_id = ? AND (? IS NULL OR favorite = ?)",
        )
        .bind(&owner)
        .bind(filter.favorite)
        .bind(filter.favorite)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to count contacts", e))?;

        let total: i64 = total_row
            .try_get("total")
            .map_err(|e| db_error("Failed to read contact count", e))?;

        let contacts = rows
            .iter()
            .map(Self::row_to_contact)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((contacts, u64::try_from(total).unwrap_or(0)))
    }

    async fn find(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, name, email, phone, favorite, created_at, updated_at
            FROM contacts
            WHERE id = ? AND owner_id = ?
            LIMIT 1
            "#,
        )
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Contact query failed", e))?;

        row.as_ref().map(Self::row_to_contact).transpose()
    }

    async fn create(&self, contact: Contact) -> Result<Contact, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO contacts (id, owner_id, name, email, phone, favorite, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(contact.id.to_string())
        .bind(contact.owner_id.to_string())
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(contact.favorite)
        .bind(contact.created_at)
        .bind(contact.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to create contact", e))?;

        Ok(contact)
    }

    async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        patch: ContactPatch,
    ) -> Result<Option<Contact>, DomainError> {
        let Some(mut contact) = self.find(owner_id, id).await? else {
            return Ok(None);
        };
        contact.apply(patch);

        sqlx::query(
            r#"
            UPDATE contacts SET name = ?, email = ?, phone = ?, favorite = ?, updated_at = ?
            WHERE id = ? AND owner_id = ?
            "#,
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(contact.favorite)
        .bind(contact.updated_at)
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update contact", e))?;

        Ok(Some(contact))
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError> {
        let Some(contact) = self.find(owner_id, id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM contacts WHERE id = ? AND owner_id = ?")
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete contact", e))?;

        Ok(Some(contact))
    }
}
