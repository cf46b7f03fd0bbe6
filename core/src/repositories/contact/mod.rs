mod memory;
mod repository;

pub use memory::InMemoryContactRepository;
pub use repository::ContactRepository;
