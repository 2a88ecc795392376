//! Repository port implemented by every environment backend.

use crate::environment::domain::{BackendKind, Environment, EnvironmentQuery, Label};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for environment repository operations.
pub type EnvironmentRepositoryResult<T> = Result<T, EnvironmentRepositoryError>;

/// Environment repository contract.
///
/// Exactly one implementation is active per process. After bootstrap it is
/// shared read-only behind an `Arc`, so implementations that keep internal
/// mutable state must synchronize it themselves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnvironmentRepository: Send + Sync {
    /// Returns the kind of backend behind this repository.
    fn kind(&self) -> BackendKind;

    /// Returns the label used when a query does not name one.
    fn default_label(&self) -> &Label;

    /// Replaces the label used when a query does not name one.
    fn set_default_label(&mut self, label: Label);

    /// Resolves the configuration for an application.
    ///
    /// The query label falls back to [`Self::default_label`] when absent.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentRepositoryError::LabelNotFound`] when the label
    /// does not exist in the backing store, or
    /// [`EnvironmentRepositoryError::Unavailable`] when the store cannot be
    /// reached.
    async fn find_one(&self, query: &EnvironmentQuery) -> EnvironmentRepositoryResult<Environment>;
}

/// Errors returned by environment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum EnvironmentRepositoryError {
    /// The requested label does not exist in the backing store.
    #[error("no such label: {0}")]
    LabelNotFound(Label),

    /// The backing store could not be reached.
    #[error("environment repository unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl EnvironmentRepositoryError {
    /// Wraps a failure to reach the backing store.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
