//! Integration tests driving the compiled mcpctl binary against temporary
//! configuration roots.
//!
//! Every test builds its own config tree and passes `--config-dir`, so
//! nothing here ever touches real user configuration. Network-backed
//! commands (search, info, update) are exercised at the unit level
//! instead; these tests stay offline.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

mod list_tests;
mod server_tests;
mod toggle_tests;

/// A temporary Claude configuration root.
pub struct TestRoot {
    _temp: TempDir,
    claude_dir: PathBuf,
}

impl TestRoot {
    /// An empty root: the `.claude` directory exists, no store files do.
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let claude_dir = temp.path().join(".claude");
        fs::create_dir_all(&claude_dir).unwrap();
        Self {
            _temp: temp,
            claude_dir,
        }
    }

    /// Write the settings ledger.
    pub fn write_settings(&self, content: &str) {
        fs::write(self.claude_dir.join("settings.json"), content).unwrap();
    }

    pub fn read_settings(&self) -> String {
        fs::read_to_string(self.claude_dir.join("settings.json")).unwrap()
    }

    /// Write the global server store (the sibling `.claude.json`).
    pub fn write_global(&self, content: &str) {
        fs::write(self.global_path(), content).unwrap();
    }

    pub fn global_path(&self) -> PathBuf {
        let mut os = self.claude_dir.as_os_str().to_os_string();
        os.push(".json");
        PathBuf::from(os)
    }

    /// Write a plugin descriptor under the cache tree.
    pub fn write_plugin_descriptor(&self, publisher: &str, plugin: &str, content: &str) {
        let dir = self.claude_dir.join("plugins").join("cache").join(publisher).join(plugin);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(".mcp.json"), content).unwrap();
    }

    /// A command pointed at this root.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mcpctl").unwrap();
        cmd.arg("--config-dir").arg(&self.claude_dir);
        cmd
    }
}
