//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `pb_core`:
//!
//! - **Database**: MySQL repositories for users and contacts using SQLx
//! - **Mail**: verification mail delivery (SendGrid, mock)
//! - **Avatar**: image resizing and storage on the local filesystem
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use pb_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Mail module - verification mail providers
pub mod mail;

/// Avatar module - resized image storage
pub mod avatar;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail delivery error
    #[error("Mail service error: {0}")]
    Mail(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::internal(error.to_string())
    }
}
