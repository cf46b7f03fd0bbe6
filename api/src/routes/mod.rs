//! Route handlers grouped by resource

pub mod contacts;
pub mod users;
