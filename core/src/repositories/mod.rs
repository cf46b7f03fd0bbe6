//! Repository interfaces and in-memory implementations.

pub mod contact;
pub mod user;

pub use contact::{ContactRepository, InMemoryContactRepository};
pub use user::{InMemoryUserRepository, UserRepository};
