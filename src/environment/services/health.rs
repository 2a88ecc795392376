//! Health probe binding for the active repository.

use crate::environment::{
    domain::{EnvironmentQuery, HealthSnapshot, ServerSettings},
    ports::EnvironmentRepository,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reports the health of the active environment repository on demand.
///
/// The probe has no logic of its own: it issues one lookup against the
/// repository and reports `up` with the returned source names, or `down`
/// with the failure.
pub struct HealthProbe<C>
where
    C: Clock + Send + Sync,
{
    repository: Arc<dyn EnvironmentRepository>,
    clock: Arc<C>,
    query: EnvironmentQuery,
}

impl<C> HealthProbe<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a probe issuing [`EnvironmentQuery::health_check`].
    #[must_use]
    pub fn new(repository: Arc<dyn EnvironmentRepository>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            query: EnvironmentQuery::health_check(),
        }
    }

    /// Replaces the probe query.
    #[must_use]
    pub fn with_query(mut self, query: EnvironmentQuery) -> Self {
        self.query = query;
        self
    }

    /// Returns the query issued on each check.
    #[must_use]
    pub const fn query(&self) -> &EnvironmentQuery {
        &self.query
    }

    /// Probes the repository.
    pub async fn check(&self) -> HealthSnapshot {
        let result = self.repository.find_one(&self.query).await;
        let checked_at = self.clock.utc();
        match result {
            Ok(environment) => {
                let sources = environment
                    .property_sources()
                    .iter()
                    .map(|source| source.name().to_owned())
                    .collect();
                HealthSnapshot::up(checked_at, sources)
            }
            Err(err) => {
                warn!(
                    backend = %self.repository.kind(),
                    error = %err,
                    "environment repository health check failed"
                );
                HealthSnapshot::down(checked_at, err.to_string())
            }
        }
    }
}

/// Binds a health probe to `repository` when health reporting is enabled.
///
/// Returns `None` when `server.health.enabled` is `false`.
#[must_use]
pub fn bind_health_probe<C>(
    server: &ServerSettings,
    repository: Arc<dyn EnvironmentRepository>,
    clock: Arc<C>,
) -> Option<HealthProbe<C>>
where
    C: Clock + Send + Sync,
{
    if !server.health_enabled() {
        debug!("environment repository health probe disabled");
        return None;
    }
    debug!(backend = %repository.kind(), "binding environment repository health probe");
    Some(HealthProbe::new(repository, clock))
}
