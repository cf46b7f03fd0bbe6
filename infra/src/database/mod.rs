//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and schema bootstrap
//! - Repository implementations for users and contacts

pub mod connection;
pub mod mysql;

pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlContactRepository, MySqlUserRepository};
