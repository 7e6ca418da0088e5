//! List MCP servers (or the plugin ledger) for human display.

use crate::config::ConfigPaths;
use crate::mcp::{Aggregator, SettingsStore, toggle};
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

/// List all configured MCP servers from Claude Code configuration.
///
/// Servers are collected from the global store and from installed plugin
/// descriptors, with enabled state overlaid from the settings ledger.
///
/// # Examples
///
/// ```bash
/// # All servers, all sources
/// mcpctl list
///
/// # Only servers that are currently enabled
/// mcpctl list --enabled
///
/// # The plugin ledger instead of the server view
/// mcpctl list --plugins
/// ```
#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Show only enabled servers.
    #[arg(long)]
    enabled: bool,

    /// Show the plugin enabled/disabled ledger instead of servers.
    #[arg(long)]
    plugins: bool,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, paths: &ConfigPaths) -> Result<()> {
        if self.plugins {
            return self.list_plugins(paths);
        }

        let servers = Aggregator::new(paths).list_filtered(self.enabled);

        if servers.is_empty() {
            println!("No MCP servers found.");
            return Ok(());
        }

        println!("Found {} MCP server(s):\n", servers.len());

        for server in &servers {
            let status = if server.enabled {
                "enabled".green()
            } else {
                "disabled".dimmed()
            };

            println!("  {} ({status})", server.name.bold());
            println!("    Type: {}", server.server_type);
            if let Some(url) = &server.url {
                println!("    URL: {url}");
            }
            if let Some(command) = &server.command {
                if server.args.is_empty() {
                    println!("    Command: {command}");
                } else {
                    println!("    Command: {command} {}", server.args.join(" "));
                }
            }
            println!();
        }

        Ok(())
    }

    fn list_plugins(&self, paths: &ConfigPaths) -> Result<()> {
        let store = SettingsStore::new(paths.settings_path());
        let plugins = toggle::list_plugins(&store, self.enabled)?;

        if plugins.is_empty() {
            println!("No plugins found in settings.");
            return Ok(());
        }

        println!("Found {} plugin(s):\n", plugins.len());
        for plugin in &plugins {
            let status = if plugin.enabled {
                "enabled".green()
            } else {
                "disabled".dimmed()
            };
            println!("  {} ({status})", plugin.id.bold());
        }

        Ok(())
    }
}
