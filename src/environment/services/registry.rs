//! Process-wide holder of the single environment repository.

use super::HealthProbe;
use crate::environment::{domain::BackendKind, ports::EnvironmentRepository};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Lifecycle state of a [`RepositoryRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// No environment repository exists yet.
    Unconfigured,
    /// Exactly one environment repository is installed.
    Configured,
}

/// How the installed repository came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryOrigin {
    /// Built by backend selection.
    Selected(BackendKind),
    /// Supplied by the embedding application before bootstrap.
    External,
}

impl fmt::Display for RepositoryOrigin {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selected(kind) => write!(formatter, "selected {kind} backend"),
            Self::External => formatter.write_str("external registration"),
        }
    }
}

/// Errors returned by registry transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A second repository would be installed.
    #[error("environment repository already configured by {0}")]
    AlreadyConfigured(RepositoryOrigin),
}

/// Holds the single environment repository and its optional health probe.
///
/// The registry moves from [`RegistryState::Unconfigured`] to
/// [`RegistryState::Configured`] exactly once and never back.
pub struct RepositoryRegistry<C>
where
    C: Clock + Send + Sync,
{
    installed: Option<(Arc<dyn EnvironmentRepository>, RepositoryOrigin)>,
    health_probe: Option<HealthProbe<C>>,
}

impl<C> RepositoryRegistry<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an unconfigured registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            installed: None,
            health_probe: None,
        }
    }

    /// Registers a repository supplied by the embedding application, such
    /// as a test double. Bootstrap then skips backend selection.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyConfigured`] when a repository is
    /// already installed.
    pub fn register_external(
        &mut self,
        repository: Arc<dyn EnvironmentRepository>,
    ) -> Result<(), RegistryError> {
        self.install(repository, RepositoryOrigin::External)
    }

    pub(super) fn install(
        &mut self,
        repository: Arc<dyn EnvironmentRepository>,
        origin: RepositoryOrigin,
    ) -> Result<(), RegistryError> {
        if let Some((_, existing)) = &self.installed {
            return Err(RegistryError::AlreadyConfigured(*existing));
        }
        self.installed = Some((repository, origin));
        Ok(())
    }

    pub(super) fn attach_health_probe(&mut self, probe: HealthProbe<C>) {
        self.health_probe = Some(probe);
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> RegistryState {
        if self.installed.is_some() {
            RegistryState::Configured
        } else {
            RegistryState::Unconfigured
        }
    }

    /// Returns a shared handle to the installed repository.
    #[must_use]
    pub fn repository(&self) -> Option<Arc<dyn EnvironmentRepository>> {
        self.installed
            .as_ref()
            .map(|(repository, _)| Arc::clone(repository))
    }

    /// Returns how the installed repository came to exist.
    #[must_use]
    pub fn origin(&self) -> Option<RepositoryOrigin> {
        self.installed.as_ref().map(|(_, origin)| *origin)
    }

    /// Returns the bound health probe, if any.
    #[must_use]
    pub const fn health_probe(&self) -> Option<&HealthProbe<C>> {
        self.health_probe.as_ref()
    }
}

impl<C> Default for RepositoryRegistry<C>
where
    C: Clock + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
