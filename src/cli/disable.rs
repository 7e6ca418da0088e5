//! Disable a plugin in the settings ledger.

use crate::config::ConfigPaths;
use crate::mcp::{SettingsStore, toggle};
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

/// Disable an MCP plugin in Claude Code settings.
///
/// The mirror image of `enable`: disabling an already-disabled plugin
/// succeeds without rewriting the settings file.
#[derive(Parser, Debug)]
pub struct DisableCommand {
    /// Plugin id to disable (name@publisher).
    plugin_id: String,
}

impl DisableCommand {
    /// Execute the disable command.
    pub fn execute(self, paths: &ConfigPaths) -> Result<()> {
        let store = SettingsStore::new(paths.settings_path());

        let outcome = match toggle::disable(&store, &self.plugin_id) {
            Ok(outcome) => outcome,
            Err(e) => {
                super::enable::print_known_plugins(&store);
                return Err(e);
            }
        };

        if outcome.was_already {
            println!("Plugin '{}' is already disabled.", outcome.plugin_id);
        } else {
            println!("Plugin '{}' has been {}.", outcome.plugin_id, "disabled".yellow());
            println!("Note: Restart Claude Code for changes to take effect.");
        }

        Ok(())
    }
}
