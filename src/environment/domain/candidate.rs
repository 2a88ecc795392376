//! Backend candidates and their location settings.

use super::BackendKind;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Location settings for the native backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeSettings {
    /// Locations searched for configuration files, in priority order.
    pub search_locations: Vec<String>,
}

impl Default for NativeSettings {
    fn default() -> Self {
        Self {
            search_locations: ["classpath:/", "classpath:/config", "file:./", "file:./config"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// Location settings for the git backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitSettings {
    /// Remote repository URI.
    pub uri: Option<String>,
    /// Local working directory for the clone.
    pub basedir: Option<Utf8PathBuf>,
    /// Sub-directories searched inside the repository.
    pub search_paths: Vec<String>,
}

/// Location settings for the subversion backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvnSettings {
    /// Remote repository URI.
    pub uri: Option<String>,
    /// Local working copy directory.
    pub basedir: Option<Utf8PathBuf>,
    /// Sub-directories searched inside the repository.
    pub search_paths: Vec<String>,
}

/// Location settings for every backend, of which exactly one is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSettings {
    /// Native backend settings.
    pub native: NativeSettings,
    /// Git backend settings.
    pub git: GitSettings,
    /// Subversion backend settings.
    pub svn: SvnSettings,
}

/// One concrete repository variant together with the settings needed to
/// construct it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCandidate {
    /// Native backend.
    Native(NativeSettings),
    /// Git backend.
    VersionControlled(GitSettings),
    /// Subversion backend.
    SubversionControlled(SvnSettings),
}

impl BackendCandidate {
    /// Returns the backend kind of this candidate.
    #[must_use]
    pub const fn kind(&self) -> BackendKind {
        match self {
            Self::Native(_) => BackendKind::Native,
            Self::VersionControlled(_) => BackendKind::VersionControlled,
            Self::SubversionControlled(_) => BackendKind::SubversionControlled,
        }
    }

    /// Returns the remote URI for version-controlled candidates.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        match self {
            Self::Native(_) => None,
            Self::VersionControlled(settings) => settings.uri.as_deref(),
            Self::SubversionControlled(settings) => settings.uri.as_deref(),
        }
    }
}
