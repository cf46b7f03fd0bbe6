//! Avatar image storage

pub mod local;

pub use local::LocalAvatarStorage;
