//! Validated version label type.

use super::{BackendKind, EnvironmentDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-blank version label such as a branch, tag, or commit identifier.
///
/// Labels are stored verbatim: surrounding whitespace is preserved so an
/// operator override reaches the backend exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    /// Creates a label.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentDomainError::BlankLabel`] when the value is empty
    /// or contains only whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, EnvironmentDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(EnvironmentDomainError::BlankLabel);
        }
        Ok(Self(raw))
    }

    /// Returns the conventional default label of a backend kind.
    pub(super) fn conventional(kind: BackendKind) -> Self {
        Self(kind.conventional_default_label().to_owned())
    }

    /// Interprets an optional override, treating blank values as absent.
    #[must_use]
    pub fn from_override(value: Option<&str>) -> Option<Self> {
        value.and_then(|raw| Self::new(raw).ok())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Label {
    type Error = EnvironmentDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
