//! Value objects returned by the services.

pub mod user_profile;

pub use user_profile::{LoginOutcome, UserProfile};
