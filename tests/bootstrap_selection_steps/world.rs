//! Shared world state for environment repository bootstrap scenarios.

use std::sync::Arc;

use envrepo::environment::{
    adapters::memory::{InMemoryEnvironmentStore, InMemoryRepositoryFactory},
    domain::{ActiveProfiles, EnvironmentSettings, ServerSettings},
    ports::EnvironmentRepository,
    services::{BootstrapResult, EnvironmentBootstrap, RepositoryRegistry},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Registry type used by the BDD world.
pub type TestRegistry = RepositoryRegistry<DefaultClock>;

/// Scenario world for bootstrap behaviour tests.
pub struct BootstrapWorld {
    /// Store shared by every repository the factory builds.
    pub store: InMemoryEnvironmentStore,
    /// Factory used for backend selection.
    pub factory: Arc<InMemoryRepositoryFactory>,
    /// Registry driven by bootstrap.
    pub registry: TestRegistry,
    /// Active deployment profiles.
    pub profiles: ActiveProfiles,
    /// Per-backend location settings.
    pub settings: EnvironmentSettings,
    /// Server-wide settings.
    pub server: ServerSettings,
    /// Result of the last bootstrap run.
    pub outcome: Option<BootstrapResult<Arc<dyn EnvironmentRepository>>>,
}

impl BootstrapWorld {
    /// Creates a world with an unconfigured registry and default settings.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryEnvironmentStore::new();
        Self {
            factory: Arc::new(InMemoryRepositoryFactory::with_store(store.clone())),
            store,
            registry: TestRegistry::new(),
            profiles: ActiveProfiles::default(),
            settings: EnvironmentSettings::default(),
            server: ServerSettings::default(),
            outcome: None,
        }
    }

    /// Runs bootstrap against the world registry and records the result.
    pub fn bootstrap(&mut self) {
        let bootstrap =
            EnvironmentBootstrap::new(Arc::clone(&self.factory), Arc::new(DefaultClock));
        self.outcome = Some(bootstrap.run(
            &mut self.registry,
            &self.profiles,
            &self.settings,
            &self.server,
        ));
    }

    /// Returns the repository produced by the last successful bootstrap.
    ///
    /// # Errors
    ///
    /// Returns an error when bootstrap has not run or failed.
    pub fn repository(&self) -> Result<&Arc<dyn EnvironmentRepository>, eyre::Report> {
        match &self.outcome {
            Some(Ok(repository)) => Ok(repository),
            Some(Err(err)) => Err(eyre::eyre!("bootstrap failed: {err}")),
            None => Err(eyre::eyre!("bootstrap has not run in this scenario")),
        }
    }
}

impl Default for BootstrapWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BootstrapWorld {
    BootstrapWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
