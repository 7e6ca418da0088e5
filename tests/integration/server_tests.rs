//! Install / remove flows against the global store.

use super::TestRoot;
use predicates::prelude::*;

#[test]
fn install_then_list_then_remove() {
    let root = TestRoot::new();
    root.write_global("{}");

    root.cmd()
        .args(["install", "context7", "@upstash/context7-mcp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been installed"));

    root.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("context7"))
        .stdout(predicate::str::contains("npx -y @upstash/context7-mcp"));

    root.cmd()
        .args(["remove", "context7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been removed"));

    root.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No MCP servers found."));
}

#[test]
fn install_duplicate_name_fails() {
    let root = TestRoot::new();
    root.write_global("{}");

    root.cmd().args(["install", "x", "@pkg/mcp"]).assert().success();

    root.cmd()
        .args(["install", "x", "@pkg/mcp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn remove_missing_server_fails() {
    let root = TestRoot::new();
    root.write_global("{}");

    root.cmd()
        .args(["remove", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn install_without_store_file_fails() {
    let root = TestRoot::new();
    // No global store on disk: mutations never create one from nothing.

    root.cmd()
        .args(["install", "x", "@pkg/mcp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn install_http_server() {
    let root = TestRoot::new();
    root.write_global("{}");

    root.cmd()
        .args(["install", "myapi", "--http", "--url", "https://api.example.com/mcp"])
        .assert()
        .success();

    let global = std::fs::read_to_string(root.global_path()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&global).unwrap();
    assert_eq!(doc["mcpServers"]["myapi"]["type"], "http");
    assert_eq!(doc["mcpServers"]["myapi"]["url"], "https://api.example.com/mcp");
}

#[test]
fn install_preserves_unrelated_fields() {
    let root = TestRoot::new();
    root.write_global(r#"{"numStartups": 3, "oauthAccount": {"id": "abc"}}"#);

    root.cmd().args(["install", "x", "@pkg/mcp"]).assert().success();

    let global = std::fs::read_to_string(root.global_path()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&global).unwrap();
    assert_eq!(doc["numStartups"], 3);
    assert_eq!(doc["oauthAccount"]["id"], "abc");
    assert!(doc["mcpServers"]["x"].is_object());
}

#[test]
fn server_status_unknown_name_fails() {
    let root = TestRoot::new();
    root.write_global(r#"{"mcpServers": {"real": {"command": "npx"}}}"#);

    root.cmd()
        .args(["server", "status", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn server_info_shows_configuration() {
    let root = TestRoot::new();
    root.write_global(
        r#"{"mcpServers": {"api": {"url": "https://api.example.invalid/mcp",
            "headers": {"Authorization": "Bearer super-secret-token"}}}}"#,
    );

    root.cmd()
        .args(["server", "info", "api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://api.example.invalid/mcp"))
        // Credential-looking header values are masked.
        .stdout(predicate::str::contains("super-secret-token").not());
}
