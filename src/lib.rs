//! mcpctl - MCP server configuration manager for Claude Code
//!
//! A command-line tool that aggregates and mutates MCP (Model Context Protocol)
//! server definitions across the configuration stores of a Claude Code
//! installation. Server definitions live in several independently-owned JSON
//! files with different shapes; mcpctl merges them into one unified view and
//! writes changes back without disturbing any field it does not manage.
//!
//! # Architecture Overview
//!
//! Three JSON stores hold MCP server state:
//! - `~/.claude/settings.json` - the enabled/disabled plugin ledger
//!   (`enabledPlugins` is the only managed field)
//! - `~/.claude.json` - globally installed servers (`mcpServers` is the only
//!   managed field)
//! - `~/.claude/plugins/cache/<publisher>/<plugin>/.mcp.json` - server
//!   definitions embedded in installed plugins (read-only from our side)
//!
//! Every write path deserializes the full document into a generic JSON tree,
//! mutates only the managed key, and re-serializes the whole tree atomically.
//! Unknown sibling fields are round-tripped untouched.
//!
//! # Core Modules
//!
//! - [`mcp`] - store readers/writers, the plugin cache scanner, the
//!   aggregator, and the enable/disable toggle logic
//! - [`config`] - configuration root resolution (`ConfigPaths`)
//! - [`registry`] - npm registry client used by the search/info/update
//!   commands
//! - [`cli`] - command-line interface built on clap
//! - [`core`] - error types and user-friendly error reporting
//! - [`utils`] - atomic file writes and JSON helpers
//!
//! # Command-Line Usage
//!
//! ```bash
//! # List every configured MCP server, from all sources
//! mcpctl list
//!
//! # Enable / disable a plugin by id
//! mcpctl enable context7@claude-plugins-official
//! mcpctl disable context7@claude-plugins-official
//!
//! # Install an npx-based server into the global store
//! mcpctl install context7 @upstash/context7-mcp
//!
//! # Discover servers on npm
//! mcpctl search kubernetes
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod mcp;
pub mod registry;
pub mod utils;
