//! Environment lookup request.

use super::{EnvironmentDomainError, Label};

/// Profile used when a query names none.
pub const DEFAULT_PROFILE: &str = "default";

/// Application name used by the health probe query.
pub const HEALTH_CHECK_APPLICATION: &str = "app";

/// Request for the configuration of one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentQuery {
    application: String,
    profiles: Vec<String>,
    label: Option<Label>,
}

impl EnvironmentQuery {
    /// Creates a query for an application and its profiles.
    ///
    /// The application name and profiles are trimmed. An empty profile list
    /// becomes `["default"]`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentDomainError::EmptyApplicationName`] when the
    /// application name is empty after trimming, or
    /// [`EnvironmentDomainError::EmptyProfileName`] when any profile is.
    pub fn new<I, S>(
        application: impl Into<String>,
        profiles: I,
    ) -> Result<Self, EnvironmentDomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let application = application.into().trim().to_owned();
        if application.is_empty() {
            return Err(EnvironmentDomainError::EmptyApplicationName);
        }

        let mut normalized = Vec::new();
        for profile in profiles {
            let token = profile.as_ref().trim();
            if token.is_empty() {
                return Err(EnvironmentDomainError::EmptyProfileName);
            }
            normalized.push(token.to_owned());
        }
        if normalized.is_empty() {
            normalized.push(DEFAULT_PROFILE.to_owned());
        }

        Ok(Self {
            application,
            profiles: normalized,
            label: None,
        })
    }

    /// Returns the query issued by the health probe: application `app`,
    /// profile `default`, repository default label.
    #[must_use]
    pub fn health_check() -> Self {
        Self {
            application: HEALTH_CHECK_APPLICATION.to_owned(),
            profiles: vec![DEFAULT_PROFILE.to_owned()],
            label: None,
        }
    }

    /// Pins the query to a label instead of the repository default.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// Returns the application name.
    #[must_use]
    pub fn application(&self) -> &str {
        &self.application
    }

    /// Returns the requested profiles in order.
    #[must_use]
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    /// Returns the requested label, if any.
    #[must_use]
    pub const fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}
