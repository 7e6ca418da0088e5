//! Configuration inspection: summary, paths, export/import, validation.

use crate::config::ConfigPaths;
use crate::constants::HEALTH_PROBE_TIMEOUT;
use crate::mcp::models::{ServerDefinition, ServerEntry, ServerType};
use crate::mcp::{Aggregator, GlobalStore};
use crate::utils::fs::{read_json_file, write_json_file};
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Manage MCP server configuration and settings.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
enum ConfigSubcommand {
    /// Show a summary of the current configuration.
    Show,

    /// Show configuration file paths.
    Paths,

    /// Export global MCP server configuration to a file.
    ///
    /// The export can be used as a backup, shared with teammates, or
    /// imported on another machine.
    Export {
        /// Output file (default: stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import MCP server configuration from a file.
    ///
    /// By default existing servers are skipped; use --merge to update
    /// them in place.
    Import {
        /// File produced by `config export`.
        file: PathBuf,

        /// Update servers that already exist.
        #[arg(long)]
        merge: bool,

        /// Show what would be imported without making changes.
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate all MCP server configurations.
    ///
    /// Checks duplicate names across sources, URL
    /// syntax and reachability, and command availability.
    Validate {
        /// Show every check result, not just the summary.
        #[arg(long = "details")]
        details: bool,
    },
}

/// On-disk format of `config export`.
#[derive(Debug, Serialize, Deserialize)]
struct ExportFile {
    version: String,
    #[serde(rename = "exportedAt")]
    exported_at: String,
    servers: BTreeMap<String, ServerEntry>,
}

impl ConfigCommand {
    /// Execute the config command.
    pub async fn execute(self, paths: &ConfigPaths) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(paths),
            ConfigSubcommand::Paths => {
                println!("Configuration file paths:");
                for path in paths.all_paths() {
                    println!("  {}", path.display());
                }
                Ok(())
            }
            ConfigSubcommand::Export { output } => export(paths, output.as_deref()),
            ConfigSubcommand::Import { file, merge, dry_run } => {
                import(paths, &file, merge, dry_run)
            }
            ConfigSubcommand::Validate { details } => validate(paths, details).await,
        }
    }
}

fn show(paths: &ConfigPaths) -> Result<()> {
    let servers = Aggregator::new(paths).list_all();
    let enabled = servers.iter().filter(|s| s.enabled).count();

    println!("MCP Configuration Summary:");
    println!("  Total servers: {}", servers.len());
    println!("  Enabled: {enabled}");
    println!("  Disabled: {}", servers.len() - enabled);

    Ok(())
}

fn export(paths: &ConfigPaths, output: Option<&std::path::Path>) -> Result<()> {
    let store = GlobalStore::new(paths.global_config_path());
    let servers = store.list_servers()?;

    let export = ExportFile {
        version: "1.0".to_string(),
        exported_at: chrono::Utc::now().to_rfc3339(),
        servers: servers
            .into_iter()
            .map(|(name, def)| (name, entry_from_definition(def)))
            .collect(),
    };

    match output {
        None => {
            println!("{}", serde_json::to_string_pretty(&export)?);
        }
        Some(path) => {
            write_json_file(path, &export, true)?;
            println!("Exported {} server(s) to {}", export.servers.len(), path.display());
        }
    }

    Ok(())
}

/// Rebuild a wire entry from an aggregated definition, keeping only the
/// fields the definition actually carried.
fn entry_from_definition(def: ServerDefinition) -> ServerEntry {
    ServerEntry {
        server_type: Some(def.server_type.as_str().to_string()),
        command: def.command,
        args: def.args,
        url: def.url,
        headers: def.headers,
    }
}

fn import(paths: &ConfigPaths, file: &std::path::Path, merge: bool, dry_run: bool) -> Result<()> {
    let import: ExportFile = read_json_file(file)?;

    if import.servers.is_empty() {
        println!("No servers found in import file.");
        return Ok(());
    }

    let store = GlobalStore::new(paths.global_config_path());

    let mut added = 0;
    let mut updated = 0;
    let mut skipped = 0;

    for (name, entry) in &import.servers {
        let exists = store.exists(name)?;

        if dry_run {
            match (exists, merge) {
                (true, true) => {
                    println!("  [update] {name}");
                    updated += 1;
                }
                (true, false) => {
                    println!("  [skip] {name} (already exists)");
                    skipped += 1;
                }
                (false, _) => {
                    println!("  [add] {name}");
                    added += 1;
                }
            }
            continue;
        }

        if exists {
            if merge {
                store.remove_server(name)?;
                store.add_server(name, entry)?;
                updated += 1;
            } else {
                println!("Skipped {name} (already exists, use --merge to update)");
                skipped += 1;
            }
        } else {
            store.add_server(name, entry)?;
            added += 1;
        }
    }

    if dry_run {
        println!("\nDry run summary: {added} to add, {updated} to update, {skipped} to skip");
    } else {
        println!("\nImport complete: {added} added, {updated} updated, {skipped} skipped");
    }

    Ok(())
}

/// A single validation check result.
#[derive(Debug)]
struct CheckResult {
    server: String,
    check: &'static str,
    status: CheckStatus,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

async fn validate(paths: &ConfigPaths, details: bool) -> Result<()> {
    let servers = Aggregator::new(paths).list_all();

    if servers.is_empty() {
        println!("No MCP servers configured.");
        return Ok(());
    }

    let mut results = Vec::new();

    // Duplicate names across sources are surfaced, never silently
    // collapsed: there is no defined tie-break for which one wins.
    let mut seen: BTreeMap<&str, &std::path::Path> = BTreeMap::new();
    for server in &servers {
        if let Some(first_source) = seen.get(server.name.as_str()) {
            results.push(CheckResult {
                server: server.name.clone(),
                check: "duplicate",
                status: CheckStatus::Warn,
                message: format!("duplicate definition (also in {})", first_source.display()),
            });
        } else {
            seen.insert(&server.name, &server.source);
        }
    }

    for server in &servers {
        match server.server_type {
            ServerType::Http => results.push(validate_http_server(server).await),
            ServerType::Command => results.push(validate_command_server(server)),
        }
    }

    let pass = results.iter().filter(|r| r.status == CheckStatus::Pass).count();
    let warn = results.iter().filter(|r| r.status == CheckStatus::Warn).count();
    let fail = results.iter().filter(|r| r.status == CheckStatus::Fail).count();

    if details {
        println!("Validation Results:");
        println!("─────────────────────────────────");
        for result in &results {
            let icon = match result.status {
                CheckStatus::Pass => "ok".green(),
                CheckStatus::Warn => "warn".yellow(),
                CheckStatus::Fail => "fail".red(),
            };
            println!("{icon} {} [{}]: {}", result.server, result.check, result.message);
        }
        println!();
    }

    println!("Validation Summary: {} servers checked", servers.len());
    println!("  Pass: {pass}");
    println!("  Warnings: {warn}");
    println!("  Failures: {fail}");

    if fail > 0 {
        bail!("validation failed with {fail} errors");
    }

    Ok(())
}

async fn validate_http_server(server: &ServerDefinition) -> CheckResult {
    let Some(url_str) = &server.url else {
        return CheckResult {
            server: server.name.clone(),
            check: "url",
            status: CheckStatus::Fail,
            message: "HTTP server has no URL configured".to_string(),
        };
    };

    let parsed = match url::Url::parse(url_str) {
        Ok(parsed) => parsed,
        Err(e) => {
            return CheckResult {
                server: server.name.clone(),
                check: "url_syntax",
                status: CheckStatus::Fail,
                message: format!("invalid URL: {e}"),
            };
        }
    };

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return CheckResult {
            server: server.name.clone(),
            check: "url_scheme",
            status: CheckStatus::Fail,
            message: format!("invalid URL scheme: {} (expected http or https)", parsed.scheme()),
        };
    }

    // Reachability is best-effort: an offline server is a warning, not a
    // configuration failure.
    let client = match reqwest::Client::builder().timeout(HEALTH_PROBE_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => {
            return CheckResult {
                server: server.name.clone(),
                check: "reachability",
                status: CheckStatus::Warn,
                message: format!("cannot verify: {e}"),
            };
        }
    };

    match client.head(url_str).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            let message = if (400..500).contains(&status) {
                format!("reachable (HTTP {status} - may require auth)")
            } else {
                format!("reachable (HTTP {status})")
            };
            CheckResult {
                server: server.name.clone(),
                check: "reachability",
                status: CheckStatus::Pass,
                message,
            }
        }
        Err(e) => CheckResult {
            server: server.name.clone(),
            check: "reachability",
            status: CheckStatus::Warn,
            message: format!("server unreachable ({e})"),
        },
    }
}

fn validate_command_server(server: &ServerDefinition) -> CheckResult {
    let Some(command) = &server.command else {
        return CheckResult {
            server: server.name.clone(),
            check: "command",
            status: CheckStatus::Fail,
            message: "command server has no command configured".to_string(),
        };
    };

    match which::which(command) {
        Ok(path) => CheckResult {
            server: server.name.clone(),
            check: "command",
            status: CheckStatus::Pass,
            message: format!("command available: {}", path.display()),
        },
        Err(_) => CheckResult {
            server: server.name.clone(),
            check: "command",
            status: CheckStatus::Fail,
            message: format!("command '{command}' not found in PATH"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn paths_in(temp: &tempfile::TempDir) -> ConfigPaths {
        let claude_dir = temp.path().join(".claude");
        fs::create_dir_all(&claude_dir).unwrap();
        ConfigPaths::with_claude_dir(claude_dir)
    }

    #[test]
    fn test_export_import_round_trip() {
        let temp = tempdir().unwrap();
        let paths = paths_in(&temp);
        fs::write(
            paths.global_config_path(),
            r#"{"mcpServers": {"ctx": {"command": "npx", "args": ["-y", "@pkg/mcp"]}}}"#,
        )
        .unwrap();

        let export_path = temp.path().join("backup.json");
        export(&paths, Some(&export_path)).unwrap();

        let exported: ExportFile = read_json_file(&export_path).unwrap();
        assert_eq!(exported.version, "1.0");
        assert!(exported.servers.contains_key("ctx"));

        // Import into a fresh root.
        let temp2 = tempdir().unwrap();
        let paths2 = paths_in(&temp2);
        fs::write(paths2.global_config_path(), "{}").unwrap();

        import(&paths2, &export_path, false, false).unwrap();
        let store = GlobalStore::new(paths2.global_config_path());
        assert!(store.exists("ctx").unwrap());
    }

    #[test]
    fn test_import_skips_existing_without_merge() {
        let temp = tempdir().unwrap();
        let paths = paths_in(&temp);
        fs::write(
            paths.global_config_path(),
            r#"{"mcpServers": {"dup": {"command": "old"}}}"#,
        )
        .unwrap();

        let import_path = temp.path().join("import.json");
        fs::write(
            &import_path,
            r#"{"version": "1.0", "exportedAt": "2025-01-01T00:00:00Z",
                "servers": {"dup": {"command": "new"}}}"#,
        )
        .unwrap();

        import(&paths, &import_path, false, false).unwrap();
        let servers = GlobalStore::new(paths.global_config_path()).list_servers().unwrap();
        assert_eq!(servers["dup"].command.as_deref(), Some("old"));

        import(&paths, &import_path, true, false).unwrap();
        let servers = GlobalStore::new(paths.global_config_path()).list_servers().unwrap();
        assert_eq!(servers["dup"].command.as_deref(), Some("new"));
    }

    #[test]
    fn test_import_dry_run_changes_nothing() {
        let temp = tempdir().unwrap();
        let paths = paths_in(&temp);
        fs::write(paths.global_config_path(), "{}").unwrap();

        let import_path = temp.path().join("import.json");
        fs::write(
            &import_path,
            r#"{"version": "1.0", "exportedAt": "2025-01-01T00:00:00Z",
                "servers": {"new": {"command": "npx"}}}"#,
        )
        .unwrap();

        import(&paths, &import_path, false, true).unwrap();
        assert!(!GlobalStore::new(paths.global_config_path()).exists("new").unwrap());
    }

    #[tokio::test]
    async fn test_validate_reports_duplicates() {
        let temp = tempdir().unwrap();
        let paths = paths_in(&temp);
        fs::write(
            paths.global_config_path(),
            r#"{"mcpServers": {"dup": {"url": "https://example.invalid/mcp"}}}"#,
        )
        .unwrap();
        let plugin_dir = paths.plugin_cache_dir().join("pub").join("plugin");
        fs::create_dir_all(&plugin_dir).unwrap();
        fs::write(plugin_dir.join(".mcp.json"), r#"{"dup": {"url": "https://other.invalid/mcp"}}"#)
            .unwrap();

        let servers = Aggregator::new(&paths).list_all();
        assert_eq!(servers.len(), 2);

        // The validation pass itself only warns on duplicates; it must
        // not fail the run for them.
        let result = validate(&paths, false).await;
        assert!(result.is_ok());
    }
}
