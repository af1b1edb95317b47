//! Tests for the disable switch and output file settings.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_disabled_by_env_does_nothing() {
    let t = Test::with_response(FOO_BAR);

    t.runb_cmd("linux")
        .env("SENHASEGURA_DISABLE_RUNB", "true")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "SENHASEGURA_DISABLE_RUNB is set to true. Plugin is disabled.",
        ));

    assert!(!t.vars_file_exists());
}

#[test]
fn test_disabled_by_env_wins_over_malformed_config_file() {
    let t = Test::with_response(FOO_BAR);
    t.write(".runb.toml", "disabled = [\n");

    t.runb_cmd("linux")
        .env("SENHASEGURA_DISABLE_RUNB", "true")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plugin is disabled"))
        .stderr(predicate::str::contains("config error").not());

    assert!(!t.vars_file_exists());
}

#[test]
fn test_disabled_false_runs_normally() {
    let t = Test::with_response(FOO_BAR);

    let output = t
        .runb_cmd("linux")
        .env("SENHASEGURA_DISABLE_RUNB", "false")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.vars_file_exists());
}

#[test]
fn test_disabled_by_config_file() {
    let t = Test::with_response(FOO_BAR);
    t.write(".runb.toml", "disabled = true\n");

    let output = t.runb("linux");
    assert_failure(&output);
    assert_stderr_contains(&output, "Plugin is disabled");
    assert_stderr_contains(&output, ".runb.toml");
    assert!(!t.vars_file_exists());
}

#[test]
fn test_secrets_file_from_env() {
    let t = Test::with_response(FOO_BAR);

    let output = t
        .runb_cmd("github")
        .env("SENHASEGURA_SECRETS_FILE", "github.env")
        .output()
        .unwrap();
    assert_success(&output);

    assert_eq!(t.read("github.env"), "echo 'FOO=bar' >> $GITHUB_ENV\n");
    assert!(!t.vars_file_exists());
}

#[test]
fn test_secrets_file_from_config_file() {
    let t = Test::with_response(FOO_BAR);
    t.write(".runb.toml", "secrets_file = \"from-config.vars\"\n");

    assert_success(&t.runb("linux"));

    assert_eq!(t.read("from-config.vars"), "declare -x FOO='bar'\n");
}

#[test]
fn test_malformed_config_file_fails() {
    let t = Test::with_response(FOO_BAR);
    t.write(".runb.toml", "disabled = [\n");

    let output = t.runb("linux");
    assert_failure(&output);
    assert_stderr_contains(&output, "config error");
    assert!(!t.vars_file_exists());
}
