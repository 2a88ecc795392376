//! Shared in-memory configuration store.

use crate::environment::{
    domain::{Label, PropertySource},
    ports::{EnvironmentRepositoryError, EnvironmentRepositoryResult},
};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe store of property sources keyed by label.
///
/// Clones share the same underlying state, so a test can keep a handle to
/// the store and alter it after a repository built on top of it has been
/// published.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnvironmentStore {
    state: Arc<RwLock<StoreState>>,
}

#[derive(Debug, Default)]
struct StoreState {
    labels: HashMap<Label, LabelContents>,
    unavailable: Option<String>,
}

/// Contents of one label.
#[derive(Debug, Clone, Default)]
pub(super) struct LabelContents {
    pub(super) version: Option<String>,
    sources: BTreeMap<String, Map<String, Value>>,
}

impl LabelContents {
    /// Returns the named source when the label holds it.
    pub(super) fn source(&self, name: &str) -> Option<PropertySource> {
        self.sources
            .get(name)
            .map(|properties| PropertySource::new(name, properties.clone()))
    }
}

impl InMemoryEnvironmentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a property source under `label`, replacing any source with the
    /// same name.
    ///
    /// Source names follow the `{application}` or `{application}-{profile}`
    /// convention, with `application` shared by every application.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentRepositoryError::Unavailable`] when lock
    /// acquisition fails.
    pub fn insert_source(
        &self,
        label: &Label,
        name: impl Into<String>,
        properties: Map<String, Value>,
    ) -> EnvironmentRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .labels
            .entry(label.clone())
            .or_default()
            .sources
            .insert(name.into(), properties);
        Ok(())
    }

    /// Records the backend version reported for `label`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentRepositoryError::Unavailable`] when lock
    /// acquisition fails.
    pub fn set_version(
        &self,
        label: &Label,
        version: impl Into<String>,
    ) -> EnvironmentRepositoryResult<()> {
        let mut state = self.write()?;
        state.labels.entry(label.clone()).or_default().version = Some(version.into());
        Ok(())
    }

    /// Makes every lookup fail with the given diagnostic message.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentRepositoryError::Unavailable`] when lock
    /// acquisition fails.
    pub fn set_unavailable(&self, message: impl Into<String>) -> EnvironmentRepositoryResult<()> {
        let mut state = self.write()?;
        state.unavailable = Some(message.into().trim().to_owned());
        Ok(())
    }

    /// Clears a previous [`Self::set_unavailable`] call.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentRepositoryError::Unavailable`] when lock
    /// acquisition fails.
    pub fn set_available(&self) -> EnvironmentRepositoryResult<()> {
        let mut state = self.write()?;
        state.unavailable = None;
        Ok(())
    }

    /// Copies out the contents of `label`.
    ///
    /// Returns `Ok(None)` when nothing was ever stored under the label.
    pub(super) fn snapshot(
        &self,
        label: &Label,
    ) -> EnvironmentRepositoryResult<Option<LabelContents>> {
        let state = self.read()?;
        if let Some(message) = &state.unavailable {
            return Err(EnvironmentRepositoryError::unavailable(std::io::Error::other(
                message.clone(),
            )));
        }
        Ok(state.labels.get(label).cloned())
    }

    fn read(&self) -> EnvironmentRepositoryResult<RwLockReadGuard<'_, StoreState>> {
        self.state.read().map_err(|err| {
            EnvironmentRepositoryError::unavailable(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> EnvironmentRepositoryResult<RwLockWriteGuard<'_, StoreState>> {
        self.state.write().map_err(|err| {
            EnvironmentRepositoryError::unavailable(std::io::Error::other(err.to_string()))
        })
    }
}
