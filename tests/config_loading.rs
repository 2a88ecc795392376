//! Integration tests for loading bootstrap configuration from disk and the
//! process environment.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod test_helpers;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use envrepo::config::{
    ACTIVE_PROFILES_ENV, CONFIG_FILE_NAME, ConfigError, DEFAULT_LABEL_ENV, HEALTH_ENABLED_ENV,
    load_config, load_from_env, load_or_default,
};
use envrepo::environment::{domain::BackendKind, services::choose_candidate};
use rstest::{fixture, rstest};
use tempfile::TempDir;
use test_helpers::EnvVarGuard;

const SAMPLE_CONFIG: &str = r#"
[profiles]
active = ["subversion"]

[server]
default_label = "release"

[server.health]
enabled = false

[backends.svn]
uri = "svn://example.com/config"
basedir = "/var/lib/envrepo/svn"

[backends.git]
uri = "https://example.com/config.git"
search_paths = ["shared", "{application}"]
"#;

struct ConfigDir {
    _temp: TempDir,
    dir: Dir,
}

impl ConfigDir {
    fn write(&self, name: &str, contents: &str) {
        self.dir
            .write(Utf8Path::new(name), contents)
            .expect("config file should be written");
    }
}

#[fixture]
fn config_dir() -> ConfigDir {
    let temp = TempDir::new().expect("temp dir should be created");
    let dir = Dir::open_ambient_dir(
        Utf8Path::from_path(temp.path()).expect("temp path should be UTF-8"),
        ambient_authority(),
    )
    .expect("temp dir should open");
    ConfigDir { _temp: temp, dir }
}

fn clear_overrides() -> EnvVarGuard {
    EnvVarGuard::apply(&[
        (ACTIVE_PROFILES_ENV, None),
        (DEFAULT_LABEL_ENV, None),
        (HEALTH_ENABLED_ENV, None),
    ])
}

#[rstest]
fn missing_file_yields_defaults(config_dir: ConfigDir) {
    let config = load_or_default(&config_dir.dir).expect("defaults should load");

    assert!(config.active_profiles().is_empty());
    assert!(config.server.health_enabled());
    assert_eq!(config.backends.native.search_locations.len(), 4);
}

#[rstest]
fn file_on_disk_is_loaded(config_dir: ConfigDir) {
    config_dir.write(CONFIG_FILE_NAME, SAMPLE_CONFIG);

    let config = load_or_default(&config_dir.dir).expect("config should load");

    assert!(config.active_profiles().contains("subversion"));
    assert_eq!(config.server.default_label.as_deref(), Some("release"));
    assert!(!config.server.health_enabled());
    assert_eq!(
        config.backends.svn.basedir.as_deref(),
        Some(Utf8Path::new("/var/lib/envrepo/svn"))
    );
    assert_eq!(config.backends.git.search_paths, ["shared", "{application}"]);
    assert_eq!(
        choose_candidate(config.active_profiles(), &config.backends).kind(),
        BackendKind::SubversionControlled
    );
}

#[rstest]
fn explicit_path_that_does_not_exist_is_a_read_error(config_dir: ConfigDir) {
    let result = load_config(&config_dir.dir, Utf8Path::new("missing.toml"));

    assert!(matches!(
        result,
        Err(ConfigError::Read { ref path, .. }) if path.as_str() == "missing.toml"
    ));
}

#[rstest]
fn malformed_file_is_a_parse_error(config_dir: ConfigDir) {
    config_dir.write(CONFIG_FILE_NAME, "[server\ndefault_label = ");

    let result = load_or_default(&config_dir.dir);

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[rstest]
fn environment_overrides_file_values(config_dir: ConfigDir) {
    config_dir.write(CONFIG_FILE_NAME, SAMPLE_CONFIG);
    let _guard = EnvVarGuard::apply(&[
        (ACTIVE_PROFILES_ENV, Some("native,dev")),
        (DEFAULT_LABEL_ENV, Some("hotfix")),
        (HEALTH_ENABLED_ENV, Some("TRUE")),
    ]);

    let config = load_from_env(&config_dir.dir).expect("config should load");

    assert_eq!(
        config.active_profiles().iter().collect::<Vec<_>>(),
        vec!["native", "dev"]
    );
    assert_eq!(config.server.default_label.as_deref(), Some("hotfix"));
    assert!(config.server.health_enabled());
}

#[rstest]
fn unset_environment_keeps_file_values(config_dir: ConfigDir) {
    config_dir.write(CONFIG_FILE_NAME, SAMPLE_CONFIG);
    let _guard = clear_overrides();

    let config = load_from_env(&config_dir.dir).expect("config should load");

    assert!(config.active_profiles().contains("subversion"));
    assert_eq!(config.server.default_label.as_deref(), Some("release"));
}

#[rstest]
fn invalid_health_override_is_rejected(config_dir: ConfigDir) {
    let _guard = EnvVarGuard::apply(&[
        (ACTIVE_PROFILES_ENV, None),
        (DEFAULT_LABEL_ENV, None),
        (HEALTH_ENABLED_ENV, Some("sometimes")),
    ]);

    let result = load_from_env(&config_dir.dir);

    assert!(matches!(
        result,
        Err(ConfigError::InvalidOverride { key, ref value })
            if key == HEALTH_ENABLED_ENV && value == "sometimes"
    ));
}
