//! Error families for accounts, tokens and request validation
//!
//! The `Display` text of each variant is the message shown to API clients.

use thiserror::Error;

/// Account and session errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email in use")]
    EmailInUse,

    #[error("Email or password is wrong")]
    InvalidCredentials,

    #[error("Email is not verified")]
    EmailNotVerified,

    #[error("User not found")]
    UserNotFound,

    /// Resend requested for an address nobody registered
    #[error("User not found")]
    UnknownEmail,

    #[error("Verification has already been passed")]
    AlreadyVerified,

    #[error("Subscription value is wrong")]
    InvalidSubscription,

    #[error("Not authorized")]
    NotAuthorized,

    #[error("Mail service unavailable, try again later")]
    MailServiceFailure,
}

/// JWT errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Request validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required '{field}' field")]
    MissingRequiredField { field: String },

    #[error("missing fields")]
    MissingFields,

    #[error("missing field favorite")]
    MissingFavorite,

    #[error("missing required field email")]
    MissingEmail,

    #[error("Wrong query field")]
    WrongQueryField,

    #[error("invalid 'email' field")]
    InvalidEmail,

    #[error("invalid 'password' field")]
    InvalidPassword,

    #[error("invalid image: {reason}")]
    InvalidImage { reason: String },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        ValidationError::MissingRequiredField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_messages_match_client_text() {
        assert_eq!(AuthError::EmailInUse.to_string(), "Email in use");
        assert_eq!(
            AuthError::AlreadyVerified.to_string(),
            "Verification has already been passed"
        );
        assert_eq!(AuthError::NotAuthorized.to_string(), "Not authorized");
    }

    #[test]
    fn validation_messages_name_the_field() {
        assert_eq!(
            ValidationError::missing("phone").to_string(),
            "missing required 'phone' field"
        );
        assert_eq!(ValidationError::WrongQueryField.to_string(), "Wrong query field");
        assert_eq!(ValidationError::MissingFavorite.to_string(), "missing field favorite");
    }
}
