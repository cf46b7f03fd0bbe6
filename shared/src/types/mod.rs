//! Type definitions module
//!
//! - `pagination` - Pagination for list endpoints
//! - `response` - Error, message and health response bodies

pub mod pagination;
pub mod response;

pub use pagination::{PaginatedResponse, Pagination};
pub use response::{error_codes, ErrorResponse, HealthResponse, HealthStatus, MessageResponse};
