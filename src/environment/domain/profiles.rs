//! Active deployment profile set.

use serde::{Deserialize, Serialize};

/// Profile token that selects the native backend.
pub const NATIVE_PROFILE: &str = "native";

/// Profile token that selects the subversion backend.
pub const SUBVERSION_PROFILE: &str = "subversion";

/// Ordered, de-duplicated set of active deployment profiles.
///
/// Tokens are trimmed; empty tokens are dropped and later duplicates are
/// ignored so the first occurrence keeps its position. Matching is
/// case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ActiveProfiles(Vec<String>);

impl ActiveProfiles {
    /// Creates a profile set from individual tokens.
    #[must_use]
    pub fn new<I, S>(profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens: Vec<String> = Vec::new();
        for profile in profiles {
            let token = profile.as_ref().trim();
            if token.is_empty() || tokens.iter().any(|existing| existing == token) {
                continue;
            }
            tokens.push(token.to_owned());
        }
        Self(tokens)
    }

    /// Parses a comma-separated profile list such as `"native, dev"`.
    #[must_use]
    pub fn parse_list(value: &str) -> Self {
        Self::new(value.split(','))
    }

    /// Returns whether the given profile is active.
    #[must_use]
    pub fn contains(&self, profile: &str) -> bool {
        self.0.iter().any(|token| token == profile)
    }

    /// Returns the active profiles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns whether no profile is active.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of active profiles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<String>> for ActiveProfiles {
    fn from(value: Vec<String>) -> Self {
        Self::new(value)
    }
}

impl From<ActiveProfiles> for Vec<String> {
    fn from(value: ActiveProfiles) -> Self {
        value.0
    }
}
