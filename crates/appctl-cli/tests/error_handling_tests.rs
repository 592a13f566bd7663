//! Tests for error messages, suggestions and exit codes.

mod support;

use std::fs;

use predicates::prelude::*;

use support::Sandbox;

#[test]
fn test_show_without_state_is_not_found() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("show")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No tracked application"))
        .stderr(predicate::str::contains("appctl import"));
}

#[test]
fn test_refresh_without_state_is_not_found() {
    let sandbox = Sandbox::new();
    sandbox.cmd().arg("refresh").assert().code(3);
}

#[test]
fn test_corrupt_state_is_user_error() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.state_path(), "{ not json").unwrap();

    sandbox
        .cmd()
        .arg("show")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unreadable"));
}

#[test]
fn test_update_rejects_identity_change() {
    let sandbox = Sandbox::tracking();
    sandbox
        .cmd()
        .args(["update", "--name", "renamed-app"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("rejected"))
        .stderr(predicate::str::contains("cannot change after creation"));
}

#[test]
fn test_update_reports_every_violation_on_its_own_line() {
    let sandbox = Sandbox::tracking();
    let output = sandbox
        .cmd()
        .args(["--quiet", "update", "--name", "renamed-app", "--org", "other-org"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr).unwrap();
    let violations: Vec<_> = stderr
        .lines()
        .filter(|line| line.contains("Can't mutate"))
        .collect();
    assert_eq!(violations.len(), 2, "stderr was:\n{stderr}");
    assert!(violations[0].contains("other-org"));
    assert!(violations[1].contains("renamed-app"));
}

#[test]
fn test_create_rejects_empty_name() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["create", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing application name"));

    assert!(!sandbox.state_path().exists());
}

#[test]
fn test_create_refuses_when_already_tracking() {
    let sandbox = Sandbox::tracking();
    sandbox
        .cmd()
        .args(["create", "another-app"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Already tracking 'demo-app'"));
}

#[test]
fn test_import_refuses_when_already_tracking() {
    let sandbox = Sandbox::tracking();
    sandbox.cmd().args(["import", "another-app"]).assert().code(2);
}

#[test]
fn test_missing_explicit_config_is_configuration_error() {
    let sandbox = Sandbox::new();
    fs::remove_file(sandbox.config_path()).unwrap();

    sandbox.cmd().arg("show").assert().code(4);
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let sandbox = Sandbox::new();
    sandbox.cmd().arg("frobnicate").assert().code(2);
}
