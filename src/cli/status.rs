//! Show the current toggle state of a plugin.

use crate::config::ConfigPaths;
use crate::mcp::{SettingsStore, toggle};
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

/// Show the enabled/disabled state of a plugin.
///
/// A plugin missing from the ledger reads as disabled, but the output
/// makes the distinction explicit so "disabled" and "not installed" are
/// never confused.
#[derive(Parser, Debug)]
pub struct StatusCommand {
    /// Plugin id to query (name@publisher).
    plugin_id: String,
}

impl StatusCommand {
    /// Execute the status command.
    pub fn execute(self, paths: &ConfigPaths) -> Result<()> {
        let store = SettingsStore::new(paths.settings_path());
        let (enabled, exists) = toggle::status(&store, &self.plugin_id)?;

        if !exists {
            println!("Plugin '{}' is not present in settings (treated as disabled).", self.plugin_id);
            return Ok(());
        }

        let state = if enabled {
            "enabled".green()
        } else {
            "disabled".yellow()
        };
        println!("Plugin '{}' is {state}.", self.plugin_id);

        Ok(())
    }
}
