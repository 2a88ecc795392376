//! Domain model for environment repository selection.
//!
//! The domain covers the inputs of backend selection (active profiles,
//! server settings, per-backend location settings), the selected backend
//! candidate, and the values exchanged with a repository (queries, resolved
//! environments, health snapshots). All infrastructure concerns are kept
//! outside the domain boundary.

mod candidate;
mod environment;
mod error;
mod health;
mod kind;
mod label;
mod profiles;
mod query;
mod settings;

pub use candidate::{
    BackendCandidate, EnvironmentSettings, GitSettings, NativeSettings, SvnSettings,
};
pub use environment::{Environment, PropertySource};
pub use error::EnvironmentDomainError;
pub use health::{HealthSnapshot, HealthStatus};
pub use kind::BackendKind;
pub use label::Label;
pub use profiles::{ActiveProfiles, NATIVE_PROFILE, SUBVERSION_PROFILE};
pub use query::{DEFAULT_PROFILE, EnvironmentQuery, HEALTH_CHECK_APPLICATION};
pub use settings::{HealthSettings, ServerSettings};
