//! Global constants used throughout the mcpctl codebase.
//!
//! This module contains file names, managed field names, and network
//! parameters that are used across multiple modules. Defining them
//! centrally improves maintainability and makes magic strings more
//! discoverable.

use std::time::Duration;

/// Name of the Claude Code configuration directory under `$HOME`.
pub const CLAUDE_DIR_NAME: &str = ".claude";

/// File name of the settings ledger inside the configuration directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Managed field in the settings ledger mapping plugin id to enabled flag.
///
/// Every sibling field of this key is opaque and must be round-tripped
/// untouched by any write.
pub const ENABLED_PLUGINS_FIELD: &str = "enabledPlugins";

/// Managed field holding server definitions, both in the global store and
/// in wrapped plugin descriptors.
pub const MCP_SERVERS_FIELD: &str = "mcpServers";

/// Descriptor file name looked for in each installed plugin directory.
pub const PLUGIN_DESCRIPTOR_FILE: &str = ".mcp.json";

/// Path of the plugin cache relative to the configuration directory.
pub const PLUGIN_CACHE_SUBDIR: &str = "plugins/cache";

/// Base URL of the npm registry used by search/info/update.
pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Timeout for npm registry requests (30 seconds).
pub const REGISTRY_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for HTTP health probes (5 seconds).
///
/// Probes are best-effort reachability checks; a slow server should not
/// stall the whole status listing.
pub const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
