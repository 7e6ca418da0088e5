//! MCP (Model Context Protocol) server configuration management.
//!
//! This module is the core of mcpctl: reading server definitions from the
//! heterogeneous stores of a Claude Code installation, merging them into a
//! unified view, and writing changes back while preserving every field the
//! engine does not manage.
//!
//! - [`models`] - server definitions, transport types, plugin identifiers
//! - [`settings`] - the enabled/disabled plugin ledger (`settings.json`)
//! - [`global`] - the global server store (`.claude.json`)
//! - [`scanner`] - server definitions embedded in installed plugins
//! - [`aggregator`] - the merged, overlay-applied server view
//! - [`toggle`] - the enable/disable state machine
//!
//! Every operation opens, reads, mutates in memory, and rewrites
//! synchronously; nothing here holds long-lived state across calls.

pub mod aggregator;
pub mod global;
pub mod models;
pub mod scanner;
pub mod settings;
pub mod toggle;

pub use aggregator::Aggregator;
pub use global::GlobalStore;
pub use models::{PluginId, ServerDefinition, ServerEntry, ServerType};
pub use settings::SettingsStore;
pub use toggle::{PluginInfo, ToggleOutcome};

#[cfg(test)]
mod tests;
