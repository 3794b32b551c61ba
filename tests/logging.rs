//! Logging and verbosity tests.
//!
//! These tests verify that verbose flags and logging environment variables
//! control debug output appropriately.

mod support;
use support::*;

#[test]
fn test_verbose_flag_shows_debug_output() {
    let t = Test::init();

    let output = t
        .cmd()
        .args(["--verbose", "set", "TEST_KEY", "test_value"])
        .output()
        .unwrap();
    assert_success(&output);

    // debug logging goes to stderr, the user-facing message to stdout
    assert_stdout_contains(&output, "set");
    assert_stderr_contains(&output, "saved env file");
}

#[test]
fn test_default_no_log_output() {
    let t = Test::init();

    let output = t.set("TEST_KEY", "test_value");
    assert_success(&output);

    // Without verbose, stderr should be minimal or empty (no debug/trace)
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("saved env file"),
        "Default mode should not show debug output, got: {}",
        err
    );
}

#[test]
fn test_envault_log_env_var() {
    let t = Test::init();

    let output = t
        .cmd()
        .env("ENVAULT_LOG", "envault=debug")
        .args(["set", "TEST_KEY", "test_value"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "saved env file");
}

#[test]
fn test_envault_log_overrides_verbose() {
    let t = Test::init();

    // an explicit filter that silences the crate wins over --verbose
    let output = t
        .cmd()
        .env("ENVAULT_LOG", "envault=error")
        .args(["--verbose", "set", "TEST_KEY", "test_value"])
        .output()
        .unwrap();
    assert_success(&output);

    let err = stderr(&output);
    assert!(
        !err.contains("saved env file"),
        "ENVAULT_LOG filter should override --verbose, got: {}",
        err
    );
}

#[test]
fn test_verbose_init() {
    let t = Test::new();

    let output = t.cmd().args(["--verbose", "init"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "initialized");
}
