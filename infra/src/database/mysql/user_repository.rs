//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pb_core::domain::entities::{Subscription, User, UserChange};
use pb_core::errors::{AuthError, DomainError};
use pb_core::repositories::UserRepository;

use super::db_error;

const USER_COLUMNS: &str = "id, email, password_hash, subscription, token, avatar_url, \
                            verify, verification_token, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let column = |name: &str, e: sqlx::Error| {
            DomainError::internal(format!("Failed to get {}: {}", name, e))
        };

        let id: String = row.try_get("id").map_err(|e| column("id", e))?;
        let subscription: String = row
            .try_get("subscription")
            .map_err(|e| column("subscription", e))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| column("password_hash", e))?,
            subscription: subscription
                .parse::<Subscription>()
                .map_err(DomainError::internal)?,
            token: row.try_get("token").map_err(|e| column("token", e))?,
            avatar_url: row.try_get("avatar_url").map_err(|e| column("avatar_url", e))?,
            verify: row.try_get("verify").map_err(|e| column("verify", e))?,
            verification_token: row
                .try_get("verification_token")
                .map_err(|e| column("verification_token", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
        })
    }

    async fn find_one(&self, filter: &str, value: String) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE {} = ? LIMIT 1", USER_COLUMNS, filter);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("User query failed", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.find_one("id", id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", email.to_string()).await
    }

    async fn find_by_verification_token(
        &self,
        verification_token: &str,
    ) -> Result<Option<User>, DomainError> {
        self.find_one("verification_token", verification_token.to_string())
            .await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS user_exists")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check user existence", e))?;

        let exists: i64 = row
            .try_get("user_exists")
            .map_err(|e| db_error("Failed to read existence result", e))?;

        Ok(exists == 1)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, password_hash, subscription, token, avatar_url,
                verify, verification_token, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.subscription.as_str())
            .bind(&user.token)
            .bind(&user.avatar_url)
            .bind(user.verify)
            .bind(&user.verification_token)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::Auth(AuthError::EmailInUse)
                }
                other => db_error("Failed to create user", other),
            })?;

        Ok(user)
    }

    async fn apply(&self, id: Uuid, change: UserChange) -> Result<User, DomainError> {
        let now = Utc::now();
        let key = id.to_string();

        let query = match &change {
            UserChange::Verified => sqlx::query(
                "UPDATE users SET verify = TRUE, verification_token = NULL, updated_at = ? \
                 WHERE id = ?",
            )
            .bind(now)
            .bind(&key),
            UserChange::SessionStarted(token) => {
                sqlx::query("UPDATE users SET token = ?, updated_at = ? WHERE id = ?")
                    .bind(token)
                    .bind(now)
                    .bind(&key)
            }
            UserChange::SessionEnded(token) => sqlx::query(
                "UPDATE users SET token = NULL, updated_at = ? WHERE id = ? AND token = ?",
            )
            .bind(now)
            .bind(&key)
            .bind(token),
            UserChange::Subscription(subscription) => {
                sqlx::query("UPDATE users SET subscription = ?, updated_at = ? WHERE id = ?")
                    .bind(subscription.as_str())
                    .bind(now)
                    .bind(&key)
            }
            UserChange::AvatarUrl(avatar_url) => {
                sqlx::query("UPDATE users SET avatar_url = ?, updated_at = ? WHERE id = ?")
                    .bind(avatar_url)
                    .bind(now)
                    .bind(&key)
            }
        };

        query
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update user", e))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }
}
