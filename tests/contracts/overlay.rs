//! Contract tests for environment overlay resolution and layered config.

use crate::common::*;
use revroot::config::Config;
use revroot::{ConfigOverlay, PathSpace};

fn overlay(env: &TestRoot, environment: Option<&str>) -> ConfigOverlay {
    ConfigOverlay::new(PathSpace::new(env.root()), environment.map(str::to_string))
}

/// CONTRACT: without an environment copy, the default path wins even when an
/// environment is configured.
#[test]
fn contract_default_path_without_override() {
    let env = TestRoot::new();
    env.write_file("scap/x", "default");
    let overlay = overlay(&env, Some("prod"));

    assert_eq!(overlay.env_specific_path("x"), env.path("scap/x"));
}

/// CONTRACT: the environment copy wins, and both layers are listed default first.
#[test]
fn contract_environment_copy_wins() {
    let env = TestRoot::new();
    env.write_file("scap/x", "default");
    env.write_file("scap/environments/prod/x", "prod");
    let overlay = overlay(&env, Some("prod"));

    assert_eq!(
        overlay.env_specific_path("x"),
        env.path("scap/environments/prod/x")
    );
    assert_eq!(
        overlay.env_specific_paths(["x"]),
        vec![env.path("scap/x"), env.path("scap/environments/prod/x")]
    );
}

/// CONTRACT: with only the environment copy, only it is listed.
#[test]
fn contract_environment_only_layer() {
    let env = TestRoot::new();
    env.write_file("scap/environments/prod/x", "prod");
    let overlay = overlay(&env, Some("prod"));

    assert_eq!(
        overlay.env_specific_paths(["x"]),
        vec![env.path("scap/environments/prod/x")]
    );
}

/// CONTRACT: config sections from the environment layer replace the default's.
#[test]
fn contract_config_follows_overlay() {
    let env = TestRoot::new();
    env.write_file(
        "scap/revroot.toml",
        "[retention]\nkeep = 8\n\n[link]\nbackup = true\n",
    );
    env.write_file("scap/environments/prod/revroot.toml", "[retention]\nkeep = 2\n");

    let (config, warnings) = Config::load_layered(&overlay(&env, Some("prod"))).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(config.retention.keep.get(), 2);
    assert!(config.link.backup);

    let (config, _) = Config::load_layered(&overlay(&env, None)).unwrap();
    assert_eq!(config.retention.keep.get(), 8);
}
