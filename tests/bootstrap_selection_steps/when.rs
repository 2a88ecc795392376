//! When steps for environment repository bootstrap scenarios.

use super::world::BootstrapWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the environment repository is bootstrapped")]
fn bootstrap_repository(world: &mut BootstrapWorld) {
    world.bootstrap();
}

#[when(r#"the backing store becomes unavailable with "{reason}""#)]
fn store_unavailable(world: &mut BootstrapWorld, reason: String) -> Result<(), eyre::Report> {
    world
        .store
        .set_unavailable(reason)
        .wrap_err("mark backing store unavailable")
}
