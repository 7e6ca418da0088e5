//! Unified view over every MCP server source.
//!
//! The aggregator concatenates the global store and the plugin cache,
//! overlays enabled state from the settings ledger, and sorts the result
//! for reproducible output. It never fails: a source that cannot be read
//! is logged and skipped, and "no servers configured" is a valid outcome,
//! not an error.

use crate::config::ConfigPaths;
use crate::mcp::global::GlobalStore;
use crate::mcp::models::ServerDefinition;
use crate::mcp::scanner;
use crate::mcp::settings::SettingsStore;
use std::path::PathBuf;
use tracing::debug;

/// Merges server definitions from all sources into one list.
///
/// Holds only store handles; every listing re-reads the underlying files.
#[derive(Debug, Clone)]
pub struct Aggregator {
    settings: SettingsStore,
    global: GlobalStore,
    cache_root: PathBuf,
}

impl Aggregator {
    /// Build an aggregator over the stores at the given configuration root.
    #[must_use]
    pub fn new(paths: &ConfigPaths) -> Self {
        Self {
            settings: SettingsStore::new(paths.settings_path()),
            global: GlobalStore::new(paths.global_config_path()),
            cache_root: paths.plugin_cache_dir(),
        }
    }

    /// List every configured server, sorted by name.
    ///
    /// Duplicate names across sources are preserved as separate entries;
    /// the validation pass reports them as warnings rather than this
    /// method silently collapsing one of them. A server with no ledger
    /// entry keeps its default enabled value (false).
    #[must_use]
    pub fn list_all(&self) -> Vec<ServerDefinition> {
        let mut servers = Vec::new();

        match self.global.list_servers() {
            Ok(map) => servers.extend(map.into_values()),
            Err(e) => debug!(error = %e, "global server store unavailable, continuing without it"),
        }

        servers.extend(scanner::scan(&self.cache_root));

        match self.settings.read_enabled_map() {
            Ok(overlay) => {
                for server in &mut servers {
                    if let Some(&enabled) = overlay.get(&server.name) {
                        server.enabled = enabled;
                    }
                }
            }
            Err(e) => debug!(error = %e, "settings ledger unavailable, enabled state defaulted"),
        }

        servers.sort_by(|a, b| a.name.cmp(&b.name));
        servers
    }

    /// List servers, optionally restricted to enabled ones.
    #[must_use]
    pub fn list_filtered(&self, enabled_only: bool) -> Vec<ServerDefinition> {
        let mut servers = self.list_all();
        if enabled_only {
            servers.retain(|s| s.enabled);
        }
        servers
    }

    /// Find every server with the given name, across all sources.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Vec<ServerDefinition> {
        let mut servers = self.list_all();
        servers.retain(|s| s.name == name);
        servers
    }
}
