//! Shared utilities and common types for the phonebook server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response and pagination structures
//! - Validation and log masking helpers

pub mod config;
pub mod types;
pub mod utils;

pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    MailConfig, ServerConfig, StorageConfig,
};
pub use types::{error_codes, ErrorResponse, MessageResponse, PaginatedResponse, Pagination};
pub use utils::validation;
