//! Token service module for JWT management
//!
//! Signs and verifies the HS256 session tokens handed out at login.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
