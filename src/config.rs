//! Bootstrap configuration loading.
//!
//! Discovers and loads `envrepo.toml` from a configuration directory, then
//! applies environment variable overrides. Overrides take precedence over
//! the file; a missing file yields defaults.

use crate::environment::domain::{ActiveProfiles, EnvironmentSettings, ServerSettings};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use std::io;
use thiserror::Error;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "envrepo.toml";

/// Comma-separated active profiles; replaces `profiles.active`.
pub const ACTIVE_PROFILES_ENV: &str = "ENVREPO_PROFILES_ACTIVE";

/// Default label override; replaces `server.default_label`.
pub const DEFAULT_LABEL_ENV: &str = "ENVREPO_SERVER_DEFAULT_LABEL";

/// `true` or `false`; replaces `server.health.enabled`.
pub const HEALTH_ENABLED_ENV: &str = "ENVREPO_SERVER_HEALTH_ENABLED";

/// Top-level configuration read at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Profile section.
    pub profiles: ProfilesConfig,

    /// Server-wide settings.
    pub server: ServerSettings,

    /// Per-backend location settings.
    pub backends: EnvironmentSettings,
}

/// Profile section of the config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfilesConfig {
    /// Active deployment profiles.
    pub active: ActiveProfiles,
}

impl BootstrapConfig {
    /// Returns the active deployment profiles.
    #[must_use]
    pub const fn active_profiles(&self) -> &ActiveProfiles {
        &self.profiles.active
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path of the config file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The config file is not valid TOML for [`BootstrapConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment variable override has an invalid value.
    #[error("invalid value '{value}' for {key}")]
    InvalidOverride {
        /// Environment variable name.
        key: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Parses a config file from a string.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] when the contents are not valid TOML or do
/// not match the config schema.
pub fn parse_config(contents: &str) -> ConfigResult<BootstrapConfig> {
    Ok(toml::from_str(contents)?)
}

/// Loads `path` relative to `dir`.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] when the file cannot be read, or
/// [`ConfigError::Parse`] when it cannot be parsed.
pub fn load_config(dir: &Dir, path: &Utf8Path) -> ConfigResult<BootstrapConfig> {
    let contents = dir.read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    parse_config(&contents)
}

/// Loads [`CONFIG_FILE_NAME`] from `dir`, or returns defaults when absent.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file exists but cannot be read or
/// parsed.
pub fn load_or_default(dir: &Dir) -> ConfigResult<BootstrapConfig> {
    let path = Utf8Path::new(CONFIG_FILE_NAME);
    if dir.exists(path) {
        debug!(path = %path, "found config file");
        load_config(dir, path)
    } else {
        debug!(path = %path, "no config file found; using defaults");
        Ok(BootstrapConfig::default())
    }
}

/// Applies environment variable overrides read through `lookup`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidOverride`] when [`HEALTH_ENABLED_ENV`] is
/// not `true` or `false`.
pub fn apply_overrides<L>(mut config: BootstrapConfig, lookup: L) -> ConfigResult<BootstrapConfig>
where
    L: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(ACTIVE_PROFILES_ENV) {
        debug!(key = ACTIVE_PROFILES_ENV, value = %value, "overriding active profiles");
        config.profiles.active = ActiveProfiles::parse_list(&value);
    }

    if let Some(value) = lookup(DEFAULT_LABEL_ENV) {
        debug!(key = DEFAULT_LABEL_ENV, value = %value, "overriding default label");
        config.server.default_label = Some(value);
    }

    if let Some(value) = lookup(HEALTH_ENABLED_ENV) {
        let enabled = match value.trim().to_ascii_lowercase().as_str() {
            "true" => true,
            "false" => false,
            _ => {
                return Err(ConfigError::InvalidOverride {
                    key: HEALTH_ENABLED_ENV,
                    value,
                });
            }
        };
        debug!(key = HEALTH_ENABLED_ENV, enabled, "overriding health probe setting");
        config.server.health.enabled = enabled;
    }

    Ok(config)
}

/// Loads configuration from `dir` and applies overrides from the process
/// environment.
///
/// # Errors
///
/// Returns [`ConfigError`] when loading or an override fails.
pub fn load_from_env(dir: &Dir) -> ConfigResult<BootstrapConfig> {
    apply_overrides(load_or_default(dir)?, |key| std::env::var(key).ok())
}
