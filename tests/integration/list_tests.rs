//! Listing servers across sources.

use super::TestRoot;
use predicates::prelude::*;

#[test]
fn list_empty_root_reports_no_servers() {
    let root = TestRoot::new();

    // No store files at all: a valid, non-error outcome.
    root.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No MCP servers found."));
}

#[test]
fn list_merges_global_and_plugin_sources() {
    let root = TestRoot::new();
    root.write_global(r#"{"mcpServers": {"global-srv": {"command": "npx", "args": ["-y", "pkg"]}}}"#);
    root.write_plugin_descriptor(
        "official",
        "context7",
        r#"{"mcpServers": {"plugin-srv": {"url": "https://example.com/mcp"}}}"#,
    );

    root.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 MCP server(s):"))
        .stdout(predicate::str::contains("global-srv"))
        .stdout(predicate::str::contains("plugin-srv"));
}

#[test]
fn list_enabled_filters_by_ledger() {
    let root = TestRoot::new();
    root.write_global(
        r#"{"mcpServers": {"on": {"command": "npx"}, "off": {"command": "npx"}}}"#,
    );
    root.write_settings(r#"{"enabledPlugins": {"on": true, "off": false}}"#);

    root.cmd()
        .args(["list", "--enabled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("on"))
        .stdout(predicate::str::contains("off").not());
}

#[test]
fn list_plugins_shows_ledger() {
    let root = TestRoot::new();
    root.write_settings(
        r#"{"enabledPlugins": {"context7@claude-plugins-official": true, "other@pub": false}}"#,
    );

    root.cmd()
        .args(["list", "--plugins"])
        .assert()
        .success()
        .stdout(predicate::str::contains("context7@claude-plugins-official"))
        .stdout(predicate::str::contains("other@pub"));
}

#[test]
fn config_show_counts_servers() {
    let root = TestRoot::new();
    root.write_global(
        r#"{"mcpServers": {"a": {"command": "npx"}, "b": {"url": "https://x.example"}}}"#,
    );
    root.write_settings(r#"{"enabledPlugins": {"a": true}}"#);

    root.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total servers: 2"))
        .stdout(predicate::str::contains("Enabled: 1"));
}

#[test]
fn config_paths_lists_store_locations() {
    let root = TestRoot::new();

    root.cmd()
        .args(["config", "paths"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings.json"))
        .stdout(predicate::str::contains("plugins"));
}
