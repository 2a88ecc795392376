//! Backend kind discriminator.

use super::Label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of environment repository backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Reads configuration from local search locations.
    Native,
    /// Reads configuration from a git repository.
    VersionControlled,
    /// Reads configuration from a subversion repository.
    SubversionControlled,
}

impl BackendKind {
    /// Returns the canonical short name used in logs and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::VersionControlled => "git",
            Self::SubversionControlled => "subversion",
        }
    }

    /// Returns the label a backend of this kind uses when nothing else is
    /// configured.
    #[must_use]
    pub const fn conventional_default_label(self) -> &'static str {
        match self {
            Self::Native | Self::VersionControlled => "master",
            Self::SubversionControlled => "trunk",
        }
    }

    /// Returns [`Self::conventional_default_label`] as a [`Label`].
    #[must_use]
    pub fn default_label(self) -> Label {
        Label::conventional(self)
    }

    /// Returns whether the server-wide default label override applies to
    /// backends of this kind.
    ///
    /// Native repositories keep their own default label.
    #[must_use]
    pub const fn accepts_label_override(self) -> bool {
        !matches!(self, Self::Native)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
