//! Backend selection.
//!
//! Exactly one backend candidate is chosen per process. Profiles gate the
//! choice in a fixed precedence order:
//!
//! 1. `native` selects the native backend;
//! 2. otherwise `subversion` selects the subversion backend;
//! 3. otherwise the git backend is the unconditional fallback.
//!
//! Construction failures propagate unchanged. There is no fallback to the
//! next candidate.

use super::resolve_default_label;
use crate::environment::{
    domain::{
        ActiveProfiles, BackendCandidate, EnvironmentSettings, NATIVE_PROFILE, SUBVERSION_PROFILE,
        ServerSettings,
    },
    ports::{BackendConstructionError, EnvironmentRepository, RepositoryFactory},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Picks the backend candidate for the active profiles.
#[must_use]
pub fn choose_candidate(
    profiles: &ActiveProfiles,
    settings: &EnvironmentSettings,
) -> BackendCandidate {
    if profiles.contains(NATIVE_PROFILE) {
        BackendCandidate::Native(settings.native.clone())
    } else if profiles.contains(SUBVERSION_PROFILE) {
        BackendCandidate::SubversionControlled(settings.svn.clone())
    } else {
        BackendCandidate::VersionControlled(settings.git.clone())
    }
}

/// Selects and constructs the single active environment repository.
pub struct BackendSelector<F>
where
    F: RepositoryFactory + ?Sized,
{
    factory: Arc<F>,
}

impl<F> BackendSelector<F>
where
    F: RepositoryFactory + ?Sized,
{
    /// Creates a selector that builds candidates with `factory`.
    #[must_use]
    pub const fn new(factory: Arc<F>) -> Self {
        Self { factory }
    }

    /// Chooses, builds, and labels the repository for the active profiles.
    ///
    /// Version-controlled backends get their default label from
    /// [`resolve_default_label`]; the native backend keeps its own.
    ///
    /// # Errors
    ///
    /// Returns [`BackendConstructionError`] unchanged when the factory fails
    /// to build the chosen candidate.
    pub fn select(
        &self,
        profiles: &ActiveProfiles,
        settings: &EnvironmentSettings,
        server: &ServerSettings,
    ) -> Result<Box<dyn EnvironmentRepository>, BackendConstructionError> {
        let candidate = choose_candidate(profiles, settings);
        let kind = candidate.kind();
        info!(backend = %kind, profiles = ?profiles, "selected environment repository backend");

        let mut repository = self.factory.build(&candidate)?;
        if kind.accepts_label_override() {
            let label = resolve_default_label(server, &*repository);
            debug!(backend = %kind, label = %label, "fixed default label");
            repository.set_default_label(label);
        } else {
            debug!(
                backend = %kind,
                label = %repository.default_label(),
                "keeping backend default label"
            );
        }
        Ok(repository)
    }

    /// Returns `existing` unchanged when present, otherwise runs
    /// [`Self::select`].
    ///
    /// The factory is never consulted when a repository already exists.
    ///
    /// # Errors
    ///
    /// Returns [`BackendConstructionError`] when selection runs and the
    /// chosen candidate fails to build.
    pub fn select_or_existing(
        &self,
        existing: Option<Arc<dyn EnvironmentRepository>>,
        profiles: &ActiveProfiles,
        settings: &EnvironmentSettings,
        server: &ServerSettings,
    ) -> Result<Arc<dyn EnvironmentRepository>, BackendConstructionError> {
        if let Some(repository) = existing {
            info!(
                backend = %repository.kind(),
                "environment repository already registered; skipping backend selection"
            );
            return Ok(repository);
        }
        Ok(Arc::from(self.select(profiles, settings, server)?))
    }
}
