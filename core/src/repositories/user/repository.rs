//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and keeps the storage backend (MySQL, in-memory)
//! behind the domain boundary.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{User, UserChange};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use pb_core::repositories::UserRepository;
/// use pb_core::domain::entities::{User, UserChange};
/// use pb_core::errors::DomainError;
///
/// struct MySqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for MySqlUserRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_id(&self, _: Uuid) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn find_by_verification_token(&self, _: &str) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn exists_by_email(&self, _: &str) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn create(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// #   async fn apply(&self, _: Uuid, _: UserChange) -> Result<User, DomainError> { unimplemented!() }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by e-mail; callers pass the normalized (lower-cased) address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find the user a verification link was issued to
    async fn find_by_verification_token(
        &self,
        verification_token: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Check if a user exists with the given e-mail
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Create a new user in the repository
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Auth(AuthError::EmailInUse))` - The e-mail is taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Apply `change` to the stored row, touching only its columns
    ///
    /// # Returns
    /// * `Ok(User)` - The user as stored after the change
    /// * `Err(DomainError::NotFound)` - No user with this ID
    async fn apply(&self, id: Uuid, change: UserChange) -> Result<User, DomainError>;
}
