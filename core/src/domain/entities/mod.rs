//! Domain entities representing core business objects.

pub mod contact;
pub mod subscription;
pub mod token;
pub mod user;

pub use contact::{Contact, ContactFilter, ContactPatch, NewContact};
pub use subscription::Subscription;
pub use token::Claims;
pub use user::{User, UserChange};
