//! Enable / disable / status flows against the settings ledger.

use super::TestRoot;
use predicates::prelude::*;

#[test]
fn enable_disable_round_trip() {
    let root = TestRoot::new();
    root.write_settings(r#"{"enabledPlugins": {"p@pub": false}}"#);

    root.cmd()
        .args(["enable", "p@pub"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been enabled"));

    root.cmd()
        .args(["status", "p@pub"])
        .assert()
        .success()
        .stdout(predicate::str::contains("enabled"));

    root.cmd()
        .args(["disable", "p@pub"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been disabled"));

    root.cmd()
        .args(["status", "p@pub"])
        .assert()
        .success()
        .stdout(predicate::str::contains("disabled"));
}

#[test]
fn enable_twice_reports_already_enabled() {
    let root = TestRoot::new();
    root.write_settings(r#"{"enabledPlugins": {"p@pub": false}}"#);

    root.cmd().args(["enable", "p@pub"]).assert().success();
    let after_first = root.read_settings();

    root.cmd()
        .args(["enable", "p@pub"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already enabled"));

    // The second call did not rewrite the ledger.
    assert_eq!(root.read_settings(), after_first);
}

#[test]
fn enable_unknown_plugin_fails_and_hints() {
    let root = TestRoot::new();
    root.write_settings(r#"{"enabledPlugins": {"known@pub": true}}"#);

    root.cmd()
        .args(["enable", "ghost@pub"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("known@pub"));
}

#[test]
fn toggle_preserves_unknown_settings_fields() {
    let root = TestRoot::new();
    root.write_settings(
        r#"{"customField": "preserved", "permissions": {"allow": ["Bash(ls)"]},
            "enabledPlugins": {"p@pub": true}}"#,
    );

    root.cmd().args(["disable", "p@pub"]).assert().success();

    let doc: serde_json::Value = serde_json::from_str(&root.read_settings()).unwrap();
    assert_eq!(doc["customField"], "preserved");
    assert_eq!(doc["permissions"]["allow"][0], "Bash(ls)");
    assert_eq!(doc["enabledPlugins"]["p@pub"], false);
}

#[test]
fn status_of_unknown_plugin_succeeds() {
    let root = TestRoot::new();
    root.write_settings(r#"{"enabledPlugins": {}}"#);

    // Status is a pure read: unknown reads as disabled, command succeeds.
    root.cmd()
        .args(["status", "ghost@pub"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not present in settings"));
}

#[test]
fn enable_without_settings_file_fails() {
    let root = TestRoot::new();

    root.cmd()
        .args(["enable", "p@pub"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
