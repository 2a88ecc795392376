//! Factory port that constructs backend repositories.

use super::EnvironmentRepository;
use crate::environment::domain::{BackendCandidate, BackendKind};
use std::sync::Arc;
use thiserror::Error;

/// Constructs concrete repositories from selected candidates.
///
/// Construction happens once, during bootstrap. Implementations must not
/// fall back to a different backend kind when the requested one fails.
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryFactory: Send + Sync {
    /// Builds the repository described by `candidate`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendConstructionError`] when the candidate's settings are
    /// invalid or its backing store cannot be reached.
    fn build(
        &self,
        candidate: &BackendCandidate,
    ) -> Result<Box<dyn EnvironmentRepository>, BackendConstructionError>;
}

/// Errors returned when a backend repository cannot be constructed.
#[derive(Debug, Clone, Error)]
pub enum BackendConstructionError {
    /// A required location setting is missing.
    #[error("{kind} backend requires a {setting} setting")]
    MissingSetting {
        /// Backend that could not be constructed.
        kind: BackendKind,
        /// Name of the missing setting.
        setting: &'static str,
    },

    /// A location setting is present but unusable.
    #[error("{kind} backend has an invalid location '{location}': {reason}")]
    InvalidLocation {
        /// Backend that could not be constructed.
        kind: BackendKind,
        /// Offending location value.
        location: String,
        /// Reason string.
        reason: String,
    },

    /// The backing store could not be reached.
    #[error("{kind} backend is unreachable: {source}")]
    Unreachable {
        /// Backend that could not be constructed.
        kind: BackendKind,
        /// Underlying failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl BackendConstructionError {
    /// Wraps a failure to reach the backing store of `kind`.
    pub fn unreachable(
        kind: BackendKind,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Unreachable {
            kind,
            source: Arc::new(err),
        }
    }

    /// Returns the backend kind that failed to construct.
    #[must_use]
    pub const fn kind(&self) -> BackendKind {
        match self {
            Self::MissingSetting { kind, .. }
            | Self::InvalidLocation { kind, .. }
            | Self::Unreachable { kind, .. } => *kind,
        }
    }
}
