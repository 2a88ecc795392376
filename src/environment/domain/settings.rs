//! Server-wide settings consulted during bootstrap.

use super::Label;
use serde::{Deserialize, Serialize};

/// Server-wide settings loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Operator override for the default label. Blank means no override.
    pub default_label: Option<String>,

    /// Health probe settings.
    pub health: HealthSettings,
}

/// Health probe section of the server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthSettings {
    /// Whether a health probe is bound to the selected repository.
    pub enabled: bool,
}

impl Default for HealthSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ServerSettings {
    /// Sets the default label override.
    #[must_use]
    pub fn with_default_label(mut self, label: impl Into<String>) -> Self {
        self.default_label = Some(label.into());
        self
    }

    /// Enables or disables the health probe.
    #[must_use]
    pub const fn with_health_enabled(mut self, enabled: bool) -> Self {
        self.health.enabled = enabled;
        self
    }

    /// Returns the default label override, or `None` when it is unset or
    /// blank.
    #[must_use]
    pub fn default_label_override(&self) -> Option<Label> {
        Label::from_override(self.default_label.as_deref())
    }

    /// Returns whether a health probe should be bound.
    #[must_use]
    pub const fn health_enabled(&self) -> bool {
        self.health.enabled
    }
}
