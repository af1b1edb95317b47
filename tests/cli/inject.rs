//! Tests for the injection flow end to end.

use crate::support::*;

#[test]
fn test_inject_single_secret_linux() {
    let t = Test::with_response(FOO_BAR);

    let output = t.runb("linux");
    assert_success(&output);
    assert_stdout_contains(&output, "1 secret injected");

    assert_eq!(t.vars_file(), "declare -x FOO='bar'\n");
}

#[test]
fn test_default_tool_is_linux() {
    let t = Test::with_response(FOO_BAR);

    let output = t
        .cmd()
        .args(["-a", "app", "-s", "sys", "-e", "prod", "-i", RESPONSE_FILE])
        .output()
        .unwrap();
    assert_success(&output);

    assert_eq!(t.vars_file(), "declare -x FOO='bar'\n");
}

#[test]
fn test_mixed_records_flatten_with_last_write_wins() {
    let t = Test::with_response(MIXED);

    let output = t.runb("linux");
    assert_success(&output);
    assert_stdout_contains(&output, "5 secrets injected");

    assert_eq!(
        sorted_lines(&t.vars_file()),
        vec![
            "declare -x API_URL='https://api.example.com'",
            "declare -x AWS_ACCESS_KEY_ID='AKIAEXAMPLE'",
            "declare -x AWS_REGION='eu-west-1'",
            "declare -x DB_PASSWORD='ephemeral-pass'",
            "declare -x DB_USER='pam-user'",
        ]
    );
}

#[test]
fn test_empty_response_does_not_create_file() {
    let t = Test::with_response(EMPTY);

    let output = t.runb("github");
    assert_success(&output);
    assert_stdout_contains(&output, "no secrets to be injected");

    assert!(!t.vars_file_exists());
}

#[test]
fn test_runs_accumulate_in_vars_file() {
    let t = Test::with_response(FOO_BAR);
    assert_success(&t.runb("linux"));

    t.write(RESPONSE_FILE, r#"{"secrets":[{"key_values":{"BAZ":"qux"}}]}"#);
    assert_success(&t.runb("linux"));

    assert_eq!(
        t.vars_file(),
        "declare -x FOO='bar'\ndeclare -x BAZ='qux'\n"
    );
}

#[test]
fn test_response_from_stdin() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["-a", "app", "-s", "sys", "-e", "prod", "-t", "bamboo"])
        .write_stdin(FOO_BAR)
        .output()
        .unwrap();
    assert_success(&output);

    assert_eq!(t.vars_file(), "(FOO)=(.[bar])\n");
}

#[test]
fn test_secrets_file_flag() {
    let t = Test::with_response(FOO_BAR);

    let output = t
        .runb_cmd("bitbucket")
        .args(["--secrets-file", "pipeline.env"])
        .output()
        .unwrap();
    assert_success(&output);

    assert_eq!(t.read("pipeline.env"), "export (FOO)=\"(.[bar])\"\n");
    assert!(!t.vars_file_exists());
}
