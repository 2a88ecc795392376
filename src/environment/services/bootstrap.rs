//! One-shot environment repository bootstrap.
//!
//! Bootstrap drives a [`RepositoryRegistry`] from `Unconfigured` to
//! `Configured`: it selects and labels a backend, installs it, and binds a
//! health probe when enabled. A registry that is already configured, by an
//! external registration or an earlier run, is left as it is: bootstrap
//! returns the installed repository and binds no probe.

use super::{
    BackendSelector, RegistryError, RepositoryOrigin, RepositoryRegistry, bind_health_probe,
};
use crate::environment::{
    domain::{ActiveProfiles, EnvironmentSettings, ServerSettings},
    ports::{BackendConstructionError, EnvironmentRepository, RepositoryFactory},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that abort process bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The selected backend could not be constructed.
    #[error(transparent)]
    Construction(#[from] BackendConstructionError),
    /// A second repository would have been installed.
    #[error(transparent)]
    Conflict(#[from] RegistryError),
}

/// Result type for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Startup orchestration for the environment repository.
pub struct EnvironmentBootstrap<F, C>
where
    F: RepositoryFactory + ?Sized,
    C: Clock + Send + Sync,
{
    selector: BackendSelector<F>,
    clock: Arc<C>,
}

impl<F, C> EnvironmentBootstrap<F, C>
where
    F: RepositoryFactory + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a bootstrap that builds backends with `factory` and stamps
    /// health snapshots with `clock`.
    #[must_use]
    pub const fn new(factory: Arc<F>, clock: Arc<C>) -> Self {
        Self {
            selector: BackendSelector::new(factory),
            clock,
        }
    }

    /// Configures `registry` and returns the active repository.
    ///
    /// A registry that is already configured is returned untouched, with
    /// no probe bound. On failure the registry is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Construction`] when the selected backend
    /// cannot be built, or [`BootstrapError::Conflict`] when a repository
    /// would be installed twice.
    pub fn run(
        &self,
        registry: &mut RepositoryRegistry<C>,
        profiles: &ActiveProfiles,
        settings: &EnvironmentSettings,
        server: &ServerSettings,
    ) -> BootstrapResult<Arc<dyn EnvironmentRepository>> {
        let existing = registry.repository();
        let preconfigured = existing.is_some();
        let repository = self
            .selector
            .select_or_existing(existing, profiles, settings, server)?;

        if preconfigured {
            return Ok(repository);
        }

        registry.install(
            Arc::clone(&repository),
            RepositoryOrigin::Selected(repository.kind()),
        )?;
        if let Some(probe) =
            bind_health_probe(server, Arc::clone(&repository), Arc::clone(&self.clock))
        {
            registry.attach_health_probe(probe);
        }

        info!(
            backend = %repository.kind(),
            default_label = %repository.default_label(),
            health_probe = registry.health_probe().is_some(),
            "environment repository configured"
        );
        Ok(repository)
    }
}
