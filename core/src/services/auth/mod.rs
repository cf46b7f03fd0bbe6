//! Authentication service module
//!
//! Account lifecycle for the phonebook:
//! - Registration with e-mail verification
//! - Login and logout with a single stored session token
//! - Subscription tier and avatar changes

mod avatar;
mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use avatar::gravatar_url;
pub use config::AuthServiceConfig;
pub use service::AuthService;
pub use traits::{AvatarStorageTrait, AvatarUpload, MailServiceTrait};
