//! Contact book service module

mod service;

pub use service::ContactService;
