//! Remove an MCP server from the global store.

use crate::config::ConfigPaths;
use crate::mcp::GlobalStore;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

/// Remove an MCP server from Claude Code configuration.
///
/// This removes the server entry from the global store but does not
/// uninstall any npm or Python packages the server may have pulled in.
#[derive(Parser, Debug)]
#[command(visible_aliases = ["rm", "uninstall"])]
pub struct RemoveCommand {
    /// Server name to remove.
    name: String,
}

impl RemoveCommand {
    /// Execute the remove command.
    pub fn execute(self, paths: &ConfigPaths) -> Result<()> {
        let store = GlobalStore::new(paths.global_config_path());

        // Capture what we are about to remove for the confirmation line.
        let previous = store.list_servers().ok().and_then(|mut m| m.remove(&self.name));

        if let Err(e) = store.remove_server(&self.name) {
            if let Ok(servers) = store.list_servers()
                && !servers.is_empty()
            {
                eprintln!("Available servers:");
                for name in servers.keys() {
                    eprintln!("  - {name}");
                }
            }
            return Err(e);
        }

        println!("MCP server '{}' has been {}.", self.name, "removed".yellow());
        if let Some(server) = previous {
            if let Some(command) = server.command {
                println!("  (was: {command})");
            } else if let Some(url) = server.url {
                println!("  (was: {url})");
            }
        }
        println!("\nNote: Restart Claude Code for changes to take effect.");

        Ok(())
    }
}
