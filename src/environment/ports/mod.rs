//! Port contracts for environment repository backends.
//!
//! Ports define the narrow interfaces through which the selection core
//! reaches the concrete backends it never implements itself.

pub mod factory;
pub mod repository;

pub use factory::{BackendConstructionError, RepositoryFactory};
pub use repository::{
    EnvironmentRepository, EnvironmentRepositoryError, EnvironmentRepositoryResult,
};

#[cfg(test)]
pub use factory::MockRepositoryFactory;
#[cfg(test)]
pub use repository::MockEnvironmentRepository;
