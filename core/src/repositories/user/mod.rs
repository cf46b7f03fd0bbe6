mod memory;
mod repository;

pub use memory::InMemoryUserRepository;
pub use repository::UserRepository;
