//! The global server store: user-installed MCP servers in `~/.claude.json`.
//!
//! The document is owned by Claude Code and holds plenty of unrelated
//! state; `mcpServers` is the only field this tool manages. Reads tolerate
//! malformed individual entries, writes go through a generic JSON tree so
//! every sibling field is preserved.
//!
//! Read-modify-write here is not atomic across process boundaries: a
//! second mcpctl invocation or an external editor racing this one can lose
//! updates. That is an accepted limitation of a single-user local tool,
//! not something the store tries to hide.

use crate::constants::MCP_SERVERS_FIELD;
use crate::core::McpctlError;
use crate::mcp::models::{ServerDefinition, ServerEntry};
use crate::utils::fs::safe_write;
use anyhow::Result;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Handle to the global server store file.
#[derive(Debug, Clone)]
pub struct GlobalStore {
    path: PathBuf,
}

impl GlobalStore {
    /// Create a store handle for the given `.claude.json` path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
        }
    }

    /// List the servers in the managed `mcpServers` field, keyed by name.
    ///
    /// Entries that are not JSON objects are skipped with a warning.
    /// Entries missing both `url` and `command` are still returned (as an
    /// http default with empty fields); the validation pass reports them
    /// instead of this reader dropping data silently.
    ///
    /// Fails with a not-found error when the document is absent; callers
    /// that can degrade (the aggregator) catch that themselves.
    pub fn list_servers(&self) -> Result<BTreeMap<String, ServerDefinition>> {
        let doc = self.read_document()?;

        let mut servers = BTreeMap::new();
        if let Some(map) = doc.get(MCP_SERVERS_FIELD).and_then(Value::as_object) {
            for (name, value) in map {
                if !value.is_object() {
                    warn!(server = %name, "skipping non-object mcpServers entry");
                    continue;
                }
                match serde_json::from_value::<ServerEntry>(value.clone()) {
                    Ok(entry) => {
                        servers.insert(
                            name.clone(),
                            ServerDefinition::from_entry(name, entry, &self.path),
                        );
                    }
                    Err(e) => {
                        warn!(server = %name, error = %e, "skipping malformed mcpServers entry");
                    }
                }
            }
        }

        Ok(servers)
    }

    /// Whether a server with this exact name exists.
    ///
    /// A missing store file means nothing exists; this predicate never
    /// creates or modifies anything.
    pub fn exists(&self, name: &str) -> Result<bool> {
        match self.read_document() {
            Ok(doc) => Ok(doc
                .get(MCP_SERVERS_FIELD)
                .and_then(Value::as_object)
                .is_some_and(|map| map.contains_key(name))),
            Err(e)
                if matches!(
                    e.downcast_ref::<McpctlError>(),
                    Some(McpctlError::ConfigNotFound { .. })
                ) =>
            {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Add a server definition under `name`.
    ///
    /// Fails when the name already exists (case-sensitive exact match) or
    /// when the store file is absent. Only the non-empty fields of the
    /// entry are serialized; everything else in the document is preserved.
    pub fn add_server(&self, name: &str, entry: &ServerEntry) -> Result<()> {
        let mut doc = self.read_document()?;

        let root = doc.as_object_mut().ok_or_else(|| McpctlError::ParseError {
            file: self.path.display().to_string(),
            reason: "top-level value is not an object".to_string(),
        })?;

        let servers = root
            .entry(MCP_SERVERS_FIELD.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !servers.is_object() {
            *servers = Value::Object(Map::new());
        }

        let map = servers.as_object_mut().expect("just ensured object");
        if map.contains_key(name) {
            return Err(McpctlError::ServerAlreadyExists {
                name: name.to_string(),
            }
            .into());
        }

        map.insert(name.to_string(), serde_json::to_value(entry)?);

        self.write_document(&doc)
    }

    /// Remove the server named `name`.
    ///
    /// Fails when the name is absent, or when the managed map itself does
    /// not exist in the document.
    pub fn remove_server(&self, name: &str) -> Result<()> {
        let mut doc = self.read_document()?;

        let removed = doc
            .get_mut(MCP_SERVERS_FIELD)
            .and_then(Value::as_object_mut)
            .and_then(|map| map.remove(name));

        if removed.is_none() {
            return Err(McpctlError::ServerNotFound {
                name: name.to_string(),
            }
            .into());
        }

        self.write_document(&doc)
    }

    fn read_document(&self) -> Result<Value> {
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

        let doc = serde_json::from_str(&content).map_err(|e| McpctlError::ParseError {
            file: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(doc)
    }

    fn write_document(&self, doc: &Value) -> Result<()> {
        let output = serde_json::to_string_pretty(doc)?;
        safe_write(&self.path, &output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::models::ServerType;
    use tempfile::tempdir;

    fn store_with(content: &str) -> (tempfile::TempDir, GlobalStore) {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".claude.json");
        fs::write(&path, content).unwrap();
        (temp, GlobalStore::new(path))
    }

    #[test]
    fn test_list_servers_missing_file() {
        let temp = tempdir().unwrap();
        let store = GlobalStore::new(temp.path().join(".claude.json"));

        let err = store.list_servers().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<McpctlError>(),
            Some(McpctlError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_list_servers_skips_non_object_entries() {
        let (_temp, store) = store_with(
            r#"{"mcpServers": {"good": {"command": "npx"}, "bad": "not an object"}}"#,
        );

        let servers = store.list_servers().unwrap();
        assert_eq!(servers.len(), 1);
        assert!(servers.contains_key("good"));
    }

    #[test]
    fn test_list_servers_empty_entry_defaults_to_http() {
        let (_temp, store) = store_with(r#"{"mcpServers": {"bare": {}}}"#);

        let servers = store.list_servers().unwrap();
        let bare = &servers["bare"];
        // Accepted though semantically invalid; validation reports it.
        assert_eq!(bare.server_type, ServerType::Http);
        assert!(bare.command.is_none());
        assert!(bare.url.is_none());
    }

    #[test]
    fn test_add_server_then_duplicate_fails() {
        let (_temp, store) = store_with(r#"{"mcpServers": {}}"#);

        let entry = ServerEntry {
            command: Some("npx".to_string()),
            args: vec!["-y".to_string(), "@pkg/mcp".to_string()],
            ..Default::default()
        };

        store.add_server("x", &entry).unwrap();
        assert!(store.exists("x").unwrap());

        let err = store.add_server("x", &entry).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<McpctlError>(),
            Some(McpctlError::ServerAlreadyExists { .. })
        ));
    }

    #[test]
    fn test_add_server_omits_empty_fields() {
        let (_temp, store) = store_with(r#"{"mcpServers": {}}"#);

        let entry = ServerEntry {
            command: Some("npx".to_string()),
            ..Default::default()
        };
        store.add_server("lean", &entry).unwrap();

        let raw = fs::read_to_string(store.path.clone()).unwrap();
        let doc: Value = serde_json::from_str(&raw).unwrap();
        let lean = doc["mcpServers"]["lean"].as_object().unwrap();
        // Empty args/headers are omitted entirely, not written as [].
        assert!(!lean.contains_key("args"));
        assert!(!lean.contains_key("headers"));
        assert!(!lean.contains_key("url"));
        assert_eq!(lean["command"], "npx");
    }

    #[test]
    fn test_add_server_missing_file_fails() {
        let temp = tempdir().unwrap();
        let store = GlobalStore::new(temp.path().join(".claude.json"));

        let err = store.add_server("x", &ServerEntry::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<McpctlError>(),
            Some(McpctlError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_remove_server_twice_fails() {
        let (_temp, store) = store_with(r#"{"mcpServers": {"x": {"command": "npx"}}}"#);

        store.remove_server("x").unwrap();
        let err = store.remove_server("x").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<McpctlError>(),
            Some(McpctlError::ServerNotFound { .. })
        ));
    }

    #[test]
    fn test_remove_server_no_managed_map() {
        let (_temp, store) = store_with(r#"{"projects": {}}"#);

        let err = store.remove_server("x").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<McpctlError>(),
            Some(McpctlError::ServerNotFound { .. })
        ));
    }

    #[test]
    fn test_mutations_preserve_unknown_fields() {
        let (_temp, store) = store_with(
            r#"{
  "numStartups": 42,
  "projects": {"/home/user/code": {"history": ["a", "b"]}},
  "mcpServers": {"keep": {"url": "https://example.com/mcp"}}
}"#,
        );

        let entry = ServerEntry {
            command: Some("uvx".to_string()),
            args: vec!["serena-mcp".to_string()],
            ..Default::default()
        };
        store.add_server("serena", &entry).unwrap();
        store.remove_server("keep").unwrap();

        let raw = fs::read_to_string(store.path.clone()).unwrap();
        let doc: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["numStartups"], 42);
        assert_eq!(doc["projects"]["/home/user/code"]["history"][1], "b");
        assert!(doc["mcpServers"]["serena"].is_object());
        assert!(doc["mcpServers"].get("keep").is_none());
    }

    #[test]
    fn test_exists_missing_file_is_false() {
        let temp = tempdir().unwrap();
        let store = GlobalStore::new(temp.path().join(".claude.json"));
        assert!(!store.exists("anything").unwrap());
    }

    #[test]
    fn test_case_sensitive_name_match() {
        let (_temp, store) = store_with(r#"{"mcpServers": {"Context7": {"command": "npx"}}}"#);

        assert!(store.exists("Context7").unwrap());
        assert!(!store.exists("context7").unwrap());

        let entry = ServerEntry {
            command: Some("npx".to_string()),
            ..Default::default()
        };
        // Different case is a different name, so this add succeeds.
        store.add_server("context7", &entry).unwrap();
        assert!(store.exists("context7").unwrap());
    }
}
