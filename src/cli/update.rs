//! Update npx-based MCP servers to the latest published version.

use crate::config::ConfigPaths;
use crate::mcp::models::{ServerDefinition, ServerEntry};
use crate::mcp::{Aggregator, GlobalStore};
use crate::registry::RegistryClient;
use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;

/// Update MCP servers to their latest versions.
///
/// Checks the npm registry for newer versions of npx-based servers and
/// rewrites their arguments to pin the latest release. HTTP-based and
/// uvx-based servers are listed but skipped; they need manual updates.
///
/// # Examples
///
/// ```bash
/// # Check all servers without changing anything
/// mcpctl update --all --dry-run
///
/// # Update one server
/// mcpctl update context7
///
/// # Update everything that can be updated
/// mcpctl update --all
/// ```
#[derive(Parser, Debug)]
pub struct UpdateCommand {
    /// Server name to update.
    server: Option<String>,

    /// Update all updatable servers.
    #[arg(long)]
    all: bool,

    /// Show what would be updated without making changes.
    #[arg(long)]
    dry_run: bool,

    /// Re-pin the version even when already at the latest.
    #[arg(long)]
    force: bool,
}

/// Result of one server's update check.
#[derive(Debug)]
struct UpdateCheck {
    name: String,
    package: Option<String>,
    current_version: Option<String>,
    latest_version: Option<String>,
    can_update: bool,
    reason: String,
}

impl UpdateCommand {
    /// Execute the update command.
    pub async fn execute(self, paths: &ConfigPaths) -> Result<()> {
        if !self.all && self.server.is_none() {
            bail!("specify a server name or use --all");
        }

        let aggregator = Aggregator::new(paths);
        let store = GlobalStore::new(paths.global_config_path());
        let client = RegistryClient::new()?;

        let servers = aggregator.list_all();
        if servers.is_empty() {
            println!("No MCP servers configured.");
            return Ok(());
        }

        let to_check: Vec<_> = servers
            .into_iter()
            .filter(|s| self.all || Some(s.name.as_str()) == self.server.as_deref())
            .collect();

        if to_check.is_empty() {
            if let Some(name) = &self.server {
                bail!("server '{name}' not found");
            }
            println!("No servers to update.");
            return Ok(());
        }

        println!("Checking for updates...\n");

        let mut checks = Vec::new();
        let mut updatable = 0;

        for server in &to_check {
            let check = check_server(server, &client).await;

            if check.can_update {
                updatable += 1;
                let current = check.current_version.as_deref().unwrap_or("(unversioned)");
                let latest = check.latest_version.as_deref().unwrap_or("?");
                println!("  {} {}: {current} -> {latest}", "update".cyan(), check.name);
            } else if check.reason == "up-to-date" {
                let current = check.current_version.as_deref().unwrap_or("?");
                println!("  {} {}: {current} (up to date)", "ok".green(), check.name);
            } else {
                println!("  {} {}: {}", "skip".dimmed(), check.name, check.reason);
            }

            checks.push(check);
        }

        println!();

        if updatable == 0 && !self.force {
            println!("All servers are up to date.");
            return Ok(());
        }

        if self.dry_run {
            println!("Dry run: {updatable} server(s) would be updated.");
            return Ok(());
        }

        let mut updated = 0;
        let mut failed = 0;

        for check in checks {
            if !check.can_update && !self.force {
                continue;
            }
            let (Some(package), Some(latest)) = (&check.package, &check.latest_version) else {
                continue;
            };

            match apply_update(&store, &check.name, package, latest) {
                Ok(()) => {
                    println!("Updated {} to {latest}", check.name.green());
                    updated += 1;
                }
                Err(e) => {
                    eprintln!("Failed to update {}: {e:#}", check.name);
                    failed += 1;
                }
            }
        }

        println!("\nUpdate complete: {updated} updated, {failed} failed");

        Ok(())
    }
}

/// Check one server against the registry.
///
/// Only npx-based servers are updatable; everything else gets a skip
/// reason.
async fn check_server(server: &ServerDefinition, client: &RegistryClient) -> UpdateCheck {
    let mut check = UpdateCheck {
        name: server.name.clone(),
        package: None,
        current_version: None,
        latest_version: None,
        can_update: false,
        reason: String::new(),
    };

    match server.command.as_deref() {
        Some("npx") => {}
        Some(other) => {
            check.reason = format!("not npm-based ({other})");
            return check;
        }
        None => {
            check.reason = "HTTP-based server".to_string();
            return check;
        }
    }

    let Some((package, current_version)) = extract_package_info(&server.args) else {
        check.reason = "cannot determine package name".to_string();
        return check;
    };
    check.package = Some(package.clone());
    check.current_version = current_version.clone();

    let detail = match client.get_package(&package).await {
        Ok(detail) => detail,
        Err(e) => {
            check.reason = format!("npm error: {e:#}");
            return check;
        }
    };

    let Some(latest) = detail.latest_version() else {
        check.reason = "no latest version found".to_string();
        return check;
    };
    check.latest_version = Some(latest.to_string());

    if current_version.as_deref() == Some(latest) {
        check.reason = "up-to-date".to_string();
        return check;
    }

    check.can_update = true;
    check
}

/// Rewrite the server entry to pin the latest version.
///
/// The store has no in-place update, so this removes and re-adds through
/// the same mutation path the install/remove commands use.
fn apply_update(store: &GlobalStore, name: &str, package: &str, latest: &str) -> Result<()> {
    let servers = store.list_servers()?;
    let Some(existing) = servers.get(name) else {
        bail!("server '{name}' not found in global config");
    };

    let entry = ServerEntry {
        server_type: None,
        command: existing.command.clone(),
        args: update_args_to_latest(&existing.args, package, latest),
        url: existing.url.clone(),
        headers: existing.headers.clone(),
    };

    store.remove_server(name)?;
    store.add_server(name, &entry)?;
    Ok(())
}

/// Extract the npm package name and pinned version from npx arguments.
///
/// Flags are skipped; the first non-flag argument is interpreted as the
/// package spec. Scoped packages keep their leading `@`:
/// - `["-y", "@upstash/context7-mcp"]` -> `("@upstash/context7-mcp", None)`
/// - `["-y", "@pkg/mcp@1.0.0"]` -> `("@pkg/mcp", Some("1.0.0"))`
/// - `["plain@2.0.0"]` -> `("plain", Some("2.0.0"))`
fn extract_package_info(args: &[String]) -> Option<(String, Option<String>)> {
    for arg in args {
        if arg.starts_with('-') {
            continue;
        }

        // A version suffix is an '@' after the first character; the
        // leading '@' of a scoped package does not count.
        if let Some(idx) = arg[1..].rfind('@').map(|i| i + 1) {
            return Some((arg[..idx].to_string(), Some(arg[idx + 1..].to_string())));
        }
        return Some((arg.clone(), None));
    }

    None
}

/// Replace the version pin of `package` inside npx args with `latest`.
fn update_args_to_latest(args: &[String], package: &str, latest: &str) -> Vec<String> {
    let mut new_args = args.to_vec();

    for arg in &mut new_args {
        if arg.starts_with('-') {
            continue;
        }
        if arg == package || arg.starts_with(&format!("{package}@")) {
            *arg = format!("{package}@{latest}");
            break;
        }
    }

    new_args
}
