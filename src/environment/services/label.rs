//! Default label resolution.

use crate::environment::{
    domain::{Label, ServerSettings},
    ports::EnvironmentRepository,
};

/// Resolves the effective default label for `repository`.
///
/// A non-blank `default_label` in the server settings always wins and is
/// returned verbatim. Otherwise the repository's own default is kept. Blank
/// overrides count as absent.
#[must_use]
pub fn resolve_default_label<R>(settings: &ServerSettings, repository: &R) -> Label
where
    R: EnvironmentRepository + ?Sized,
{
    settings
        .default_label_override()
        .unwrap_or_else(|| repository.default_label().clone())
}
