//! HTTP layer of the phonebook backend
//!
//! Routes, request validation, authentication middleware and the mapping
//! from domain errors to HTTP responses. The binary in `main.rs` wires
//! these to concrete repositories and providers.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::AppState;
