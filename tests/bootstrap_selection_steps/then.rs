//! Then steps for environment repository bootstrap scenarios.

use super::world::{BootstrapWorld, run_async};
use envrepo::environment::{
    ports::BackendConstructionError,
    services::{BootstrapError, RegistryState},
};
use rstest_bdd_macros::then;

#[then(r#"the selected backend is "{kind}""#)]
fn selected_backend(world: &BootstrapWorld, kind: String) -> Result<(), eyre::Report> {
    let actual = world.repository()?.kind();
    if actual.as_str() != kind {
        return Err(eyre::eyre!("expected {kind} backend, selected {actual}"));
    }
    Ok(())
}

#[then(r#"the default label is "{label}""#)]
fn default_label(world: &BootstrapWorld, label: String) -> Result<(), eyre::Report> {
    let repository = world.repository()?;
    let actual = repository.default_label();
    if actual.as_str() != label {
        return Err(eyre::eyre!("expected default label '{label}', found '{actual}'"));
    }
    Ok(())
}

#[then("a health probe is bound")]
fn probe_bound(world: &BootstrapWorld) -> Result<(), eyre::Report> {
    if world.registry.health_probe().is_none() {
        return Err(eyre::eyre!("expected a bound health probe"));
    }
    Ok(())
}

#[then("no health probe is bound")]
fn no_probe_bound(world: &BootstrapWorld) -> Result<(), eyre::Report> {
    if world.registry.health_probe().is_some() {
        return Err(eyre::eyre!("expected no health probe"));
    }
    Ok(())
}

#[then("no backend was constructed")]
fn no_backend_constructed(world: &BootstrapWorld) -> Result<(), eyre::Report> {
    world.repository()?;
    let builds = world.factory.build_count();
    if builds != 0 {
        return Err(eyre::eyre!("expected no factory builds, found {builds}"));
    }
    Ok(())
}

#[then(r#"the repository origin is "{origin}""#)]
fn repository_origin(world: &BootstrapWorld, origin: String) -> Result<(), eyre::Report> {
    let actual = world
        .registry
        .origin()
        .ok_or_else(|| eyre::eyre!("registry has no installed repository"))?;
    if actual.to_string() != origin {
        return Err(eyre::eyre!("expected origin '{origin}', found '{actual}'"));
    }
    Ok(())
}

#[then(r#"the health probe reports "{status}""#)]
fn probe_reports(world: &BootstrapWorld, status: String) -> Result<(), eyre::Report> {
    let probe = world
        .registry
        .health_probe()
        .ok_or_else(|| eyre::eyre!("expected a bound health probe"))?;
    let snapshot = run_async(probe.check());
    if snapshot.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected health '{status}', found '{}' ({:?})",
            snapshot.status(),
            snapshot.message()
        ));
    }
    Ok(())
}

#[then(r#"bootstrap fails because the "{setting}" setting is missing"#)]
fn bootstrap_fails_missing_setting(
    world: &BootstrapWorld,
    setting: String,
) -> Result<(), eyre::Report> {
    let outcome = world
        .outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("bootstrap has not run in this scenario"))?;
    match outcome {
        Err(BootstrapError::Construction(BackendConstructionError::MissingSetting {
            setting: missing,
            ..
        })) if *missing == setting => Ok(()),
        Err(err) => Err(eyre::eyre!("expected missing '{setting}' setting, got {err}")),
        Ok(_) => Err(eyre::eyre!("expected bootstrap to fail")),
    }
}

#[then("the registry remains unconfigured")]
fn registry_unconfigured(world: &BootstrapWorld) -> Result<(), eyre::Report> {
    let state = world.registry.state();
    if state != RegistryState::Unconfigured {
        return Err(eyre::eyre!("expected unconfigured registry, found {state:?}"));
    }
    Ok(())
}
