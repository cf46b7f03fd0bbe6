//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not found")]
    NotFound { resource: String },

    #[error("Not authorized")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridged_errors_keep_their_message() {
        let error: DomainError = AuthError::InvalidCredentials.into();
        assert_eq!(error.to_string(), "Email or password is wrong");

        let error: DomainError = ValidationError::MissingFields.into();
        assert_eq!(error.to_string(), "missing fields");
    }

    #[test]
    fn not_found_hides_resource_from_message() {
        let error = DomainError::not_found("contact 42");
        assert_eq!(error.to_string(), "Not found");
    }
}
