//! In-memory adapter implementations.
//!
//! These adapters stand in for the git, subversion, and native backends in
//! tests and local bootstrap runs. They keep configuration in process memory
//! and never touch a filesystem or network.

mod factory;
mod repository;
mod store;

pub use factory::InMemoryRepositoryFactory;
pub use repository::InMemoryEnvironmentRepository;
pub use store::InMemoryEnvironmentStore;
