//! Inspect MCP server configuration and health.
//!
//! Claude Code manages MCP server lifecycle internally; these commands
//! only verify configuration and availability. Health checks are
//! best-effort probes: an HTTP HEAD (falling back to GET) for http
//! servers, a PATH lookup for command servers.

use crate::config::ConfigPaths;
use crate::constants::HEALTH_PROBE_TIMEOUT;
use crate::core::McpctlError;
use crate::mcp::Aggregator;
use crate::mcp::models::ServerDefinition;
use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

/// Server management commands.
#[derive(Parser, Debug)]
pub struct ServerCommand {
    #[command(subcommand)]
    command: ServerSubcommand,
}

#[derive(Subcommand, Debug)]
enum ServerSubcommand {
    /// Check MCP server status.
    ///
    /// Without arguments, checks all configured servers; with a server
    /// name, only that one. `--health` adds reachability probes.
    Status {
        /// Server name to check.
        name: Option<String>,

        /// Perform health checks (HTTP ping, command lookup).
        #[arg(long)]
        health: bool,
    },

    /// Show detailed configuration for one server.
    Info {
        /// Server name.
        name: String,
    },
}

impl ServerCommand {
    /// Execute the server command.
    pub async fn execute(self, paths: &ConfigPaths) -> Result<()> {
        match self.command {
            ServerSubcommand::Status { name, health } => status(paths, name.as_deref(), health).await,
            ServerSubcommand::Info { name } => info(paths, &name).await,
        }
    }
}

async fn status(paths: &ConfigPaths, target: Option<&str>, health: bool) -> Result<()> {
    let servers = Aggregator::new(paths).list_all();

    if servers.is_empty() {
        println!("No MCP servers configured.");
        return Ok(());
    }

    let mut found = false;
    for server in &servers {
        if let Some(target) = target
            && server.name != target
        {
            continue;
        }
        found = true;

        let (marker, state) = if server.enabled {
            ("●".green(), "enabled")
        } else {
            ("○".dimmed(), "disabled")
        };

        println!("{marker} {} ({state})", server.name);
        println!("  Type: {}", server.server_type);

        if health {
            println!("  Health: {}", check_health(server).await);
        }

        println!();
    }

    if let Some(target) = target
        && !found
    {
        return Err(McpctlError::ServerNotFound {
            name: target.to_string(),
        }
        .into());
    }

    Ok(())
}

async fn info(paths: &ConfigPaths, name: &str) -> Result<()> {
    let servers = Aggregator::new(paths).find_by_name(name);

    let Some(server) = servers.first() else {
        return Err(McpctlError::ServerNotFound {
            name: name.to_string(),
        }
        .into());
    };

    if servers.len() > 1 {
        println!(
            "{}: '{name}' is defined in {} sources; showing the first",
            "warning".yellow(),
            servers.len()
        );
    }

    println!("Server: {}", server.name.bold());
    println!("─────────────────────────────────");
    println!("Status: {}", if server.enabled { "enabled" } else { "disabled" });
    println!("Type: {}", server.server_type);
    println!("Source: {}", server.source.display());

    if let Some(command) = &server.command {
        println!("\nCommand Configuration:");
        println!("  Command: {command}");
        if !server.args.is_empty() {
            println!("  Args: {}", server.args.join(" "));
        }
        match which::which(command) {
            Ok(path) => println!("  Path: {}", path.display()),
            Err(_) => println!("  {} Command not found in PATH", "warning:".yellow()),
        }
    }

    if let Some(url) = &server.url {
        println!("\nHTTP Configuration:");
        println!("  URL: {url}");
        if !server.headers.is_empty() {
            println!("  Headers:");
            for (key, value) in &server.headers {
                println!("    {key}: {}", mask_sensitive(key, value));
            }
        }
    }

    println!("\nHealth Check:");
    println!("  {}", check_health(server).await);

    Ok(())
}

/// Probe one server for availability.
async fn check_health(server: &ServerDefinition) -> String {
    if let Some(url) = &server.url {
        return check_http_health(url).await;
    }
    if let Some(command) = &server.command {
        return check_command_health(command);
    }
    "unknown server type (no url or command)".to_string()
}

/// HEAD the URL, falling back to GET for servers that reject HEAD.
async fn check_http_health(url: &str) -> String {
    let client = match reqwest::Client::builder().timeout(HEALTH_PROBE_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => return format!("probe setup failed: {e}"),
    };

    let response = match client.head(url).send().await {
        Ok(response) => response,
        Err(_) => match client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return format!("{} unreachable: {e}", "✗".red()),
        },
    };

    let status = response.status();
    if status.is_success() || status.is_redirection() {
        format!("{} reachable (HTTP {})", "✓".green(), status.as_u16())
    } else {
        format!("{} HTTP {}", "!".yellow(), status.as_u16())
    }
}

fn check_command_health(command: &str) -> String {
    match which::which(command) {
        Ok(path) => format!("{} command available: {}", "✓".green(), path.display()),
        Err(_) => format!("{} command not found: {command}", "✗".red()),
    }
}

/// Mask header values that look like credentials.
fn mask_sensitive(key: &str, value: &str) -> String {
    let lower = key.to_lowercase();
    if lower.contains("auth") || lower.contains("token") || lower.contains("key") {
        if value.len() > 8 {
            format!("{}...{}", &value[..4], &value[value.len() - 4..])
        } else {
            "****".to_string()
        }
    } else {
        value.to_string()
    }
}
