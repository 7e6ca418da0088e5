//! Enable/disable state machine over the settings ledger.
//!
//! A plugin id is in one of three states: enabled, disabled, or unknown
//! (absent from the ledger). Toggling an id that is already in the target
//! state reports success without writing, so repeated calls leave the file
//! bytes untouched. Toggling an unknown id fails: the ledger is populated
//! by plugin installation, never by a toggle.

use crate::core::McpctlError;
use crate::mcp::models::PluginId;
use crate::mcp::settings::SettingsStore;
use anyhow::Result;

/// Result of an enable/disable operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// The plugin id that was toggled
    pub plugin_id: String,
    /// The state the plugin is now in
    pub enabled: bool,
    /// True when the plugin was already in the target state and no write
    /// was performed
    pub was_already: bool,
}

/// One entry of the plugin ledger, with its id split for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInfo {
    /// Full plugin id (`name@publisher`)
    pub id: String,
    /// Plugin name
    pub name: String,
    /// Plugin publisher
    pub publisher: String,
    /// Current enabled state
    pub enabled: bool,
}

/// Enable a plugin.
pub fn enable(store: &SettingsStore, id: &str) -> Result<ToggleOutcome> {
    set_state(store, id, true)
}

/// Disable a plugin.
pub fn disable(store: &SettingsStore, id: &str) -> Result<ToggleOutcome> {
    set_state(store, id, false)
}

fn set_state(store: &SettingsStore, id: &str, target: bool) -> Result<ToggleOutcome> {
    match store.status(id)? {
        None => Err(McpctlError::PluginNotFound {
            id: id.to_string(),
        }
        .into()),
        Some(current) if current == target => Ok(ToggleOutcome {
            plugin_id: id.to_string(),
            enabled: target,
            was_already: true,
        }),
        Some(_) => {
            store.set_enabled(id, target)?;
            Ok(ToggleOutcome {
                plugin_id: id.to_string(),
                enabled: target,
                was_already: false,
            })
        }
    }
}

/// Current state of a plugin: `(enabled, exists)`.
///
/// An unknown plugin reads as disabled, but existence is reported
/// separately so callers can distinguish "disabled" from "never heard of
/// it".
pub fn status(store: &SettingsStore, id: &str) -> Result<(bool, bool)> {
    match store.status(id)? {
        Some(enabled) => Ok((enabled, true)),
        None => Ok((false, false)),
    }
}

/// List the plugin ledger, sorted by id.
pub fn list_plugins(store: &SettingsStore, enabled_only: bool) -> Result<Vec<PluginInfo>> {
    let map = store.read_enabled_map()?;

    let mut plugins = Vec::new();
    for (id, enabled) in map {
        if enabled_only && !enabled {
            continue;
        }
        let parsed = PluginId::parse(&id);
        plugins.push(PluginInfo {
            id,
            name: parsed.name,
            publisher: parsed.publisher,
            enabled,
        });
    }

    // BTreeMap iteration is already id-ordered; keep the explicit sort as
    // the contract rather than an implementation detail.
    plugins.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(plugins)
}
