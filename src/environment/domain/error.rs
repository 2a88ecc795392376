//! Error types for environment domain validation.

use thiserror::Error;

/// Errors returned while constructing environment domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvironmentDomainError {
    /// The label is empty or contains only whitespace.
    #[error("label must not be blank")]
    BlankLabel,

    /// The application name is empty after trimming.
    #[error("application name must not be empty")]
    EmptyApplicationName,

    /// A profile name in a query is empty after trimming.
    #[error("profile name must not be empty")]
    EmptyProfileName,
}
