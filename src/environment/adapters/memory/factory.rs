//! In-memory repository factory.

use super::{InMemoryEnvironmentRepository, InMemoryEnvironmentStore};
use crate::environment::{
    domain::{BackendCandidate, BackendKind},
    ports::{BackendConstructionError, EnvironmentRepository, RepositoryFactory},
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Factory that builds [`InMemoryEnvironmentRepository`] instances.
///
/// Candidate settings are validated the way the real backends validate
/// them: version-controlled candidates need a URI with a scheme and native
/// candidates need at least one search location. Every repository built by
/// one factory shares the factory's [`InMemoryEnvironmentStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepositoryFactory {
    store: InMemoryEnvironmentStore,
    failures: Arc<RwLock<HashMap<BackendKind, String>>>,
    builds: Arc<AtomicUsize>,
}

impl InMemoryRepositoryFactory {
    /// Creates a factory over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory whose repositories read from `store`.
    #[must_use]
    pub fn with_store(store: InMemoryEnvironmentStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Returns the store shared by built repositories.
    #[must_use]
    pub const fn store(&self) -> &InMemoryEnvironmentStore {
        &self.store
    }

    /// Makes every later build of `kind` fail as unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`BackendConstructionError::Unreachable`] when lock
    /// acquisition fails.
    pub fn fail_with(
        &self,
        kind: BackendKind,
        reason: impl Into<String>,
    ) -> Result<(), BackendConstructionError> {
        let mut failures = self.failures.write().map_err(|err| {
            BackendConstructionError::unreachable(kind, std::io::Error::other(err.to_string()))
        })?;
        failures.insert(kind, reason.into());
        Ok(())
    }

    /// Returns how many build attempts this factory has received.
    #[must_use]
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    fn validate(candidate: &BackendCandidate) -> Result<(), BackendConstructionError> {
        let kind = candidate.kind();
        match candidate {
            BackendCandidate::Native(settings) => {
                if settings.search_locations.is_empty() {
                    return Err(BackendConstructionError::MissingSetting {
                        kind,
                        setting: "search_locations",
                    });
                }
                Ok(())
            }
            BackendCandidate::VersionControlled(_) | BackendCandidate::SubversionControlled(_) => {
                let uri = candidate
                    .uri()
                    .map(str::trim)
                    .filter(|uri| !uri.is_empty())
                    .ok_or(BackendConstructionError::MissingSetting {
                        kind,
                        setting: "uri",
                    })?;
                let has_scheme = uri
                    .split_once(':')
                    .is_some_and(|(scheme, rest)| !scheme.is_empty() && !rest.is_empty());
                if !has_scheme {
                    return Err(BackendConstructionError::InvalidLocation {
                        kind,
                        location: uri.to_owned(),
                        reason: "expected a URI with a scheme".to_owned(),
                    });
                }
                Ok(())
            }
        }
    }

    fn injected_failure(&self, kind: BackendKind) -> Result<(), BackendConstructionError> {
        let failures = self.failures.read().map_err(|err| {
            BackendConstructionError::unreachable(kind, std::io::Error::other(err.to_string()))
        })?;
        match failures.get(&kind) {
            Some(reason) => Err(BackendConstructionError::unreachable(
                kind,
                std::io::Error::other(reason.clone()),
            )),
            None => Ok(()),
        }
    }
}

impl RepositoryFactory for InMemoryRepositoryFactory {
    fn build(
        &self,
        candidate: &BackendCandidate,
    ) -> Result<Box<dyn EnvironmentRepository>, BackendConstructionError> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        let kind = candidate.kind();
        debug!(backend = %kind, "building in-memory environment repository");

        Self::validate(candidate)?;
        self.injected_failure(kind)?;

        Ok(Box::new(InMemoryEnvironmentRepository::new(
            kind,
            self.store.clone(),
        )))
    }
}
