//! In-memory environment repository.

use super::InMemoryEnvironmentStore;
use crate::environment::{
    domain::{BackendKind, Environment, EnvironmentQuery, Label},
    ports::{EnvironmentRepository, EnvironmentRepositoryError, EnvironmentRepositoryResult},
};
use async_trait::async_trait;

/// Name of the property source shared by every application.
const SHARED_APPLICATION: &str = "application";

/// In-memory stand-in for a concrete environment backend.
///
/// Lookups walk the same source names a file-based backend would, most
/// specific first: for each requested profile, last profile first,
/// `{app}-{profile}` then `application-{profile}`; followed by `{app}` and
/// `application`. The repository's default label always exists, even when
/// nothing was stored under it; any other label must have been populated in
/// the store.
#[derive(Debug, Clone)]
pub struct InMemoryEnvironmentRepository {
    kind: BackendKind,
    default_label: Label,
    store: InMemoryEnvironmentStore,
}

impl InMemoryEnvironmentRepository {
    /// Creates a repository of `kind` over `store`, using the kind's
    /// conventional default label.
    #[must_use]
    pub fn new(kind: BackendKind, store: InMemoryEnvironmentStore) -> Self {
        Self {
            kind,
            default_label: kind.default_label(),
            store,
        }
    }

    fn source_names(query: &EnvironmentQuery) -> Vec<String> {
        let application = query.application();
        let mut names = Vec::new();
        for profile in query.profiles().iter().rev() {
            names.push(format!("{application}-{profile}"));
            names.push(format!("{SHARED_APPLICATION}-{profile}"));
        }
        names.push(application.to_owned());
        names.push(SHARED_APPLICATION.to_owned());

        let mut unique: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        unique
    }
}

#[async_trait]
impl EnvironmentRepository for InMemoryEnvironmentRepository {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn default_label(&self) -> &Label {
        &self.default_label
    }

    fn set_default_label(&mut self, label: Label) {
        self.default_label = label;
    }

    async fn find_one(&self, query: &EnvironmentQuery) -> EnvironmentRepositoryResult<Environment> {
        let label = query.label().unwrap_or(&self.default_label);
        let contents = match self.store.snapshot(label)? {
            Some(contents) => contents,
            None if *label == self.default_label => Default::default(),
            None => return Err(EnvironmentRepositoryError::LabelNotFound(label.clone())),
        };

        let mut environment = Environment::new(query.application(), query.profiles().to_vec())
            .with_label(label.as_str());
        if let Some(version) = &contents.version {
            environment = environment.with_version(version.as_str());
        }
        for name in Self::source_names(query) {
            if let Some(source) = contents.source(&name) {
                environment.add(source);
            }
        }
        Ok(environment)
    }
}
