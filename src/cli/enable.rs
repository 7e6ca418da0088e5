//! Enable a plugin in the settings ledger.

use crate::config::ConfigPaths;
use crate::mcp::{SettingsStore, toggle};
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

/// Enable an MCP plugin in Claude Code settings.
///
/// The plugin id is `name@publisher`, for example
/// `context7@claude-plugins-official`. Only plugins already present in the
/// ledger can be toggled; unknown ids fail and the known plugins are
/// listed as a hint.
#[derive(Parser, Debug)]
pub struct EnableCommand {
    /// Plugin id to enable (name@publisher).
    plugin_id: String,
}

impl EnableCommand {
    /// Execute the enable command.
    pub fn execute(self, paths: &ConfigPaths) -> Result<()> {
        let store = SettingsStore::new(paths.settings_path());

        let outcome = match toggle::enable(&store, &self.plugin_id) {
            Ok(outcome) => outcome,
            Err(e) => {
                print_known_plugins(&store);
                return Err(e);
            }
        };

        if outcome.was_already {
            println!("Plugin '{}' is already enabled.", outcome.plugin_id);
        } else {
            println!("Plugin '{}' has been {}.", outcome.plugin_id, "enabled".green());
            println!("Note: Restart Claude Code for changes to take effect.");
        }

        Ok(())
    }
}

/// Print the ids currently in the ledger, as a hint after a failed toggle.
pub(crate) fn print_known_plugins(store: &SettingsStore) {
    if let Ok(plugins) = toggle::list_plugins(store, false)
        && !plugins.is_empty()
    {
        eprintln!("Known plugins:");
        for plugin in plugins {
            eprintln!("  - {}", plugin.id);
        }
    }
}
