//! Resolved configuration returned by a repository.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named set of configuration properties from one source file or location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySource {
    name: String,
    source: Map<String, Value>,
}

impl PropertySource {
    /// Creates a property source.
    #[must_use]
    pub fn new(name: impl Into<String>, source: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Returns the source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the properties held by this source.
    #[must_use]
    pub const fn source(&self) -> &Map<String, Value> {
        &self.source
    }
}

/// Configuration resolved for one application, profile set, and label.
///
/// Property sources are ordered most specific first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    name: String,
    profiles: Vec<String>,
    label: Option<String>,
    version: Option<String>,
    property_sources: Vec<PropertySource>,
}

impl Environment {
    /// Creates an environment with no property sources.
    #[must_use]
    pub fn new(name: impl Into<String>, profiles: Vec<String>) -> Self {
        Self {
            name: name.into(),
            profiles,
            label: None,
            version: None,
            property_sources: Vec::new(),
        }
    }

    /// Sets the label the environment was resolved at.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the backend-specific version, such as a commit id.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Appends a property source with lower precedence than those already
    /// present.
    pub fn add(&mut self, source: PropertySource) {
        self.property_sources.push(source);
    }

    /// Returns the application name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the profiles the environment was resolved for.
    #[must_use]
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    /// Returns the resolved label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the backend-specific version.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns property sources, most specific first.
    #[must_use]
    pub fn property_sources(&self) -> &[PropertySource] {
        &self.property_sources
    }
}
