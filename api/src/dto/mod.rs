pub mod contacts;
pub mod users;

pub use contacts::{ContactFieldsPatch, NewContactRequest};
pub use users::{AvatarResponse, CredentialsRequest, EmailRequest, RegisterResponse};
