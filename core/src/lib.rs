//! # Phonebook Core
//!
//! Core business logic and domain layer for the phonebook backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
