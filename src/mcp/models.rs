//! Data model for MCP server definitions and plugin identifiers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Transport type of an MCP server.
///
/// Stored configurations may omit the type entirely, or use legacy spellings
/// like `stdio`; [`ServerType::infer`] normalizes all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerType {
    /// Command-based server launched locally (npx, uvx, custom binaries)
    Command,
    /// HTTP-based server reached over the network
    Http,
}

impl ServerType {
    /// Resolve the server type from an optional explicit `type` field and
    /// the presence of a `command`.
    ///
    /// An explicit type wins (`stdio` counts as command-based); otherwise a
    /// non-empty command implies [`ServerType::Command`] and anything else
    /// defaults to [`ServerType::Http`].
    #[must_use]
    pub fn infer(explicit: Option<&str>, command: Option<&str>) -> Self {
        match explicit {
            Some("command") | Some("stdio") => Self::Command,
            Some("http") | Some("sse") => Self::Http,
            _ => {
                if command.is_some_and(|c| !c.is_empty()) {
                    Self::Command
                } else {
                    Self::Http
                }
            }
        }
    }

    /// The canonical string form (`command` / `http`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Http => "http",
        }
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw MCP server entry as stored in a JSON document.
///
/// This is the wire shape shared by the global store and plugin
/// descriptors. Empty collections and absent fields are omitted entirely on
/// serialization so a round trip never writes empty containers the user
/// did not have.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Explicit transport type, when the document carries one
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub server_type: Option<String>,

    /// The command to execute (command-based servers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Arguments to pass to the command
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Server URL (HTTP-based servers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// HTTP headers (HTTP-based servers)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

/// One MCP server as seen by the aggregator.
///
/// Unlike [`ServerEntry`], the type here is always resolved and the origin
/// file is recorded for diagnostics (duplicate detection, validation
/// messages). The `source` field is not part of the server's configuration
/// and is never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDefinition {
    /// Server identifier, unique within its source only
    pub name: String,
    /// Resolved transport type, never absent
    pub server_type: ServerType,
    /// The command to execute (command-based servers)
    pub command: Option<String>,
    /// Arguments to pass to the command
    pub args: Vec<String>,
    /// Server URL (HTTP-based servers)
    pub url: Option<String>,
    /// HTTP headers (HTTP-based servers)
    pub headers: BTreeMap<String, String>,
    /// Whether the server is enabled; authoritative value comes from the
    /// settings ledger overlay, defaults to false
    pub enabled: bool,
    /// The store file this entry came from
    pub source: PathBuf,
}

impl ServerDefinition {
    /// Build a definition from a raw store entry, resolving the type.
    #[must_use]
    pub fn from_entry(name: &str, entry: ServerEntry, source: &Path) -> Self {
        let server_type = ServerType::infer(entry.server_type.as_deref(), entry.command.as_deref());
        Self {
            name: name.to_string(),
            server_type,
            command: entry.command,
            args: entry.args,
            url: entry.url,
            headers: entry.headers,
            enabled: false,
            source: source.to_path_buf(),
        }
    }
}

/// Plugin identifier of the form `name@publisher`.
///
/// The id is split on the **last** `@`, so names containing `@` (scoped
/// npm-style names) parse correctly. An id without `@` has an empty
/// publisher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginId {
    /// Plugin name (may itself contain `@`)
    pub name: String,
    /// Publisher suffix, empty when the id had no `@`
    pub publisher: String,
}

impl PluginId {
    /// Parse an id string, splitting on the last `@`.
    #[must_use]
    pub fn parse(id: &str) -> Self {
        match id.rfind('@') {
            Some(idx) => Self {
                name: id[..idx].to_string(),
                publisher: id[idx + 1..].to_string(),
            },
            None => Self {
                name: id.to_string(),
                publisher: String::new(),
            },
        }
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.publisher.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}@{}", self.name, self.publisher)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plugin_id() {
        let id = PluginId::parse("context7@claude-plugins-official");
        assert_eq!(id.name, "context7");
        assert_eq!(id.publisher, "claude-plugins-official");
    }

    #[test]
    fn test_parse_plugin_id_multiple_at_signs() {
        // Split happens on the last '@' even when the name contains more.
        let id = PluginId::parse("multi@at@signs");
        assert_eq!(id.name, "multi@at");
        assert_eq!(id.publisher, "signs");
    }

    #[test]
    fn test_parse_plugin_id_no_publisher() {
        let id = PluginId::parse("no-publisher");
        assert_eq!(id.name, "no-publisher");
        assert_eq!(id.publisher, "");
        assert_eq!(id.to_string(), "no-publisher");
    }

    #[test]
    fn test_plugin_id_display_round_trip() {
        let id = PluginId::parse("multi@at@signs");
        assert_eq!(id.to_string(), "multi@at@signs");
    }

    #[test]
    fn test_server_type_inference() {
        assert_eq!(ServerType::infer(Some("http"), None), ServerType::Http);
        assert_eq!(ServerType::infer(Some("stdio"), None), ServerType::Command);
        assert_eq!(ServerType::infer(None, Some("npx")), ServerType::Command);
        assert_eq!(ServerType::infer(None, Some("")), ServerType::Http);
        assert_eq!(ServerType::infer(None, None), ServerType::Http);
        // Unknown explicit types fall back to command presence.
        assert_eq!(ServerType::infer(Some("weird"), Some("npx")), ServerType::Command);
    }

    #[test]
    fn test_server_entry_omits_empty_fields() {
        let entry = ServerEntry {
            command: Some("npx".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"command":"npx"}"#);
    }

    #[test]
    fn test_server_definition_always_typed() {
        let entry: ServerEntry = serde_json::from_str("{}").unwrap();
        let def = ServerDefinition::from_entry("bare", entry, Path::new("/tmp/x.json"));
        // An empty origin entry still resolves to a concrete type.
        assert_eq!(def.server_type, ServerType::Http);
        assert!(!def.enabled);
    }
}
