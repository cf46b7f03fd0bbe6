//! MySQL repository implementations

mod contact_repository;
mod user_repository;

pub use contact_repository::MySqlContactRepository;
pub use user_repository::MySqlUserRepository;

use pb_core::errors::DomainError;

/// Wrap a SQLx failure as an internal domain error with context
pub(crate) fn db_error(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!(error = %error, "{}", context);
    DomainError::internal(format!("{}: {}", context, error))
}
