//! Business services containing domain logic and use cases.

pub mod auth;
pub mod contacts;
pub mod password;
pub mod token;

pub use auth::{
    gravatar_url, AuthService, AuthServiceConfig, AvatarStorageTrait, AvatarUpload,
    MailServiceTrait,
};
pub use contacts::ContactService;
pub use token::{TokenService, TokenServiceConfig};
