//! The settings ledger: enabled/disabled state for installed plugins.
//!
//! `settings.json` belongs to Claude Code and carries many fields this tool
//! has no model for (permissions, hooks, schema references). The only
//! managed field is `enabledPlugins`, a flat map from plugin id to a
//! boolean. Every write re-serializes the complete document from a generic
//! JSON tree so unmanaged fields survive byte-for-byte in structure.

use crate::constants::ENABLED_PLUGINS_FIELD;
use crate::core::McpctlError;
use crate::utils::fs::safe_write;
use anyhow::Result;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Handle to the settings ledger file.
///
/// Holds no state beyond the path; every operation re-reads the file, so
/// the ledger is always fresh and the handle can be freely cloned.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store handle for the given settings file path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
        }
    }

    /// Read the enabled-plugin map.
    ///
    /// A missing file is not an error: Claude Code may never have written
    /// settings, which simply means no plugins are known. Invalid JSON in
    /// an existing file is surfaced as a parse error. Entries whose value
    /// is not a boolean are skipped.
    pub fn read_enabled_map(&self) -> Result<BTreeMap<String, bool>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(McpctlError::IoError(e).into()),
        };

        let doc: Value = serde_json::from_str(&content).map_err(|e| McpctlError::ParseError {
            file: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut map = BTreeMap::new();
        if let Some(plugins) = doc.get(ENABLED_PLUGINS_FIELD).and_then(Value::as_object) {
            for (id, value) in plugins {
                if let Some(enabled) = value.as_bool() {
                    map.insert(id.clone(), enabled);
                }
            }
        }

        Ok(map)
    }

    /// Current state of one plugin id: `Some(enabled)` when present,
    /// `None` when the ledger has never heard of it.
    pub fn status(&self, id: &str) -> Result<Option<bool>> {
        Ok(self.read_enabled_map()?.get(id).copied())
    }

    /// Whether the ledger has an entry for this id, enabled or not.
    pub fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.status(id)?.is_some())
    }

    /// Set the enabled flag for one plugin id.
    ///
    /// The document is read as a generic JSON tree, only the single key
    /// inside `enabledPlugins` is changed, and the whole tree is written
    /// back with stable two-space indentation. Setting a value that is
    /// already current still rewrites the file but produces identical
    /// bytes.
    ///
    /// Fails when the settings file does not exist: a toggle must not
    /// conjure a configuration root out of nothing.
    pub fn set_enabled(&self, id: &str, enabled: bool) -> Result<()> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(McpctlError::ConfigNotFound {
                    path: self.path.display().to_string(),
                }
                .into());
            }
            Err(e) => return Err(McpctlError::IoError(e).into()),
        };

        let mut doc: Value = serde_json::from_str(&content).map_err(|e| McpctlError::ParseError {
            file: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let root = doc.as_object_mut().ok_or_else(|| McpctlError::ParseError {
            file: self.path.display().to_string(),
            reason: "top-level value is not an object".to_string(),
        })?;

        // Locate or create the managed sub-map; a malformed (non-object)
        // enabledPlugins value is replaced rather than propagated.
        let plugins = root
            .entry(ENABLED_PLUGINS_FIELD.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !plugins.is_object() {
            *plugins = Value::Object(Map::new());
        }

        if let Some(map) = plugins.as_object_mut() {
            map.insert(id.to_string(), Value::Bool(enabled));
        }

        let output = serde_json::to_string_pretty(&doc)?;
        safe_write(&self.path, &output)?;

        Ok(())
    }
}
