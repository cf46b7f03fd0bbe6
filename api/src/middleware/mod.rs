pub mod auth;
pub mod cors;
pub mod validation;

pub use auth::{AuthContext, JwtAuth};
pub use cors::create_cors;
