//! Given steps for environment repository bootstrap scenarios.

use std::sync::Arc;

use super::world::BootstrapWorld;
use envrepo::environment::{
    adapters::memory::InMemoryEnvironmentRepository,
    domain::{ActiveProfiles, BackendKind},
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"the active profiles "{profiles}""#)]
fn active_profiles(world: &mut BootstrapWorld, profiles: String) {
    world.profiles = ActiveProfiles::parse_list(&profiles);
}

#[given("no active profiles")]
fn no_active_profiles(world: &mut BootstrapWorld) {
    world.profiles = ActiveProfiles::default();
}

#[given(r#"a subversion repository at "{uri}""#)]
fn subversion_repository(world: &mut BootstrapWorld, uri: String) {
    world.settings.svn.uri = Some(uri);
}

#[given(r#"a git repository at "{uri}""#)]
fn git_repository(world: &mut BootstrapWorld, uri: String) {
    world.settings.git.uri = Some(uri);
}

#[given(r#"the default label override "{label}""#)]
fn default_label_override(world: &mut BootstrapWorld, label: String) {
    world.server.default_label = Some(label);
}

#[given("health reporting is disabled")]
fn health_disabled(world: &mut BootstrapWorld) {
    world.server.health.enabled = false;
}

#[given("an externally registered repository")]
fn externally_registered(world: &mut BootstrapWorld) -> Result<(), eyre::Report> {
    let repository = InMemoryEnvironmentRepository::new(BackendKind::Native, world.store.clone());
    world
        .registry
        .register_external(Arc::new(repository))
        .wrap_err("register external repository for scenario")
}
