//! Repository health status domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health status of the active environment repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// The repository answered the probe query.
    Up,
    /// The repository failed to answer the probe query.
    Down,
}

impl HealthStatus {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Timestamped result of one health probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    status: HealthStatus,
    checked_at: DateTime<Utc>,
    sources: Vec<String>,
    message: Option<String>,
}

impl HealthSnapshot {
    /// Creates an `up` snapshot listing the property sources the probe saw.
    #[must_use]
    pub const fn up(checked_at: DateTime<Utc>, sources: Vec<String>) -> Self {
        Self {
            status: HealthStatus::Up,
            checked_at,
            sources,
            message: None,
        }
    }

    /// Creates a `down` snapshot with details.
    #[must_use]
    pub fn down(checked_at: DateTime<Utc>, message: impl Into<String>) -> Self {
        let normalized = message.into().trim().to_owned();
        Self {
            status: HealthStatus::Down,
            checked_at,
            sources: Vec::new(),
            message: (!normalized.is_empty()).then_some(normalized),
        }
    }

    /// Returns the health status.
    #[must_use]
    pub const fn status(&self) -> HealthStatus {
        self.status
    }

    /// Returns whether the repository is up.
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self.status, HealthStatus::Up)
    }

    /// Returns the probe timestamp.
    #[must_use]
    pub const fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }

    /// Returns the names of the property sources returned by the probe.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Returns the failure detail for `down` snapshots.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
