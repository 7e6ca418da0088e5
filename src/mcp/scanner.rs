//! Scanner for MCP servers embedded in installed plugins.
//!
//! The plugin cache is laid out as `<cache>/<publisher>/<plugin-dir>/`,
//! with an optional `.mcp.json` descriptor in each leaf. Plugins are
//! installed and upgraded by Claude Code itself, so the tree may be
//! half-written at any time; anything unreadable is treated as "no servers
//! here" rather than an error.
//!
//! Descriptors come in two shapes:
//!
//! ```json
//! { "my-server": { "command": "npx", "args": ["-y", "pkg"] } }
//! ```
//!
//! or wrapped the way `.mcp.json` project files are:
//!
//! ```json
//! { "mcpServers": { "my-server": { "command": "npx" } } }
//! ```
//!
//! Both interpretations are attempted and merged. When reading the flat
//! shape the literal key `mcpServers` is skipped so the wrapper of shape
//! two is never mistaken for a server name.

use crate::constants::{MCP_SERVERS_FIELD, PLUGIN_DESCRIPTOR_FILE};
use crate::mcp::models::{ServerDefinition, ServerEntry};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Walk the plugin cache and yield every embedded server definition.
///
/// The walk covers exactly two directory levels below `cache_root`
/// (publisher, then plugin directory) and reads the descriptor file in
/// each leaf. The returned iterator is lazy and restartable: every call
/// re-walks the filesystem, nothing is cached.
pub fn scan(cache_root: &Path) -> impl Iterator<Item = ServerDefinition> + use<> {
    WalkDir::new(cache_root)
        .min_depth(2)
        .max_depth(2)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(error = %e, "skipping unreadable plugin cache entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .flat_map(|entry| read_descriptor(&entry.path().join(PLUGIN_DESCRIPTOR_FILE)))
}

/// Parse one descriptor file, trying both shapes.
///
/// Missing or malformed descriptors produce an empty result, never an
/// error: a plugin without MCP servers is perfectly normal.
fn read_descriptor(path: &Path) -> Vec<ServerDefinition> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };

    let doc: Value = match serde_json::from_str(&content) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "ignoring malformed plugin descriptor");
            return Vec::new();
        }
    };

    let Some(root) = doc.as_object() else {
        return Vec::new();
    };

    let mut servers = Vec::new();

    // Shape one: a flat map from server name to config. The wrapper key of
    // shape two must not be counted as a server name here.
    for (name, value) in root {
        if name == MCP_SERVERS_FIELD {
            continue;
        }
        push_entry(&mut servers, name, value, path);
    }

    // Shape two: the same map nested under "mcpServers".
    if let Some(wrapped) = root.get(MCP_SERVERS_FIELD).and_then(Value::as_object) {
        for (name, value) in wrapped {
            push_entry(&mut servers, name, value, path);
        }
    }

    servers
}

fn push_entry(servers: &mut Vec<ServerDefinition>, name: &str, value: &Value, source: &Path) {
    if !value.is_object() {
        return;
    }
    match serde_json::from_value::<ServerEntry>(value.clone()) {
        Ok(entry) => servers.push(ServerDefinition::from_entry(name, entry, source)),
        Err(e) => {
            debug!(file = %source.display(), server = %name, error = %e,
                "skipping malformed descriptor entry");
        }
    }
}
