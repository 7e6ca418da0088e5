//! Cross-component tests for the MCP core: full store trees on disk,
//! exercised through the same paths the CLI uses.

use crate::config::ConfigPaths;
use std::fs;
use std::path::Path;

/// Test helper: lay out a complete configuration root in a temp directory.
pub(crate) fn config_root(temp: &Path) -> ConfigPaths {
    let claude_dir = temp.join(".claude");
    fs::create_dir_all(&claude_dir).unwrap();
    ConfigPaths::with_claude_dir(claude_dir)
}
