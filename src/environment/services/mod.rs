//! Application services for environment repository bootstrap.

mod bootstrap;
mod health;
mod label;
mod registry;
mod selector;

pub use bootstrap::{BootstrapError, BootstrapResult, EnvironmentBootstrap};
pub use health::{HealthProbe, bind_health_probe};
pub use label::resolve_default_label;
pub use registry::{RegistryError, RegistryState, RepositoryOrigin, RepositoryRegistry};
pub use selector::{BackendSelector, choose_candidate};
