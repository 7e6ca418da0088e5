//! Configuration root resolution.
//!
//! All stores derive their file locations from a single [`ConfigPaths`]
//! handle, constructed once per command invocation. The handle is passed
//! in explicitly rather than read from a global, so tests can point it at
//! a temporary directory without touching real user configuration.
//!
//! Default layout (relative to `$HOME`):
//!
//! | Store | Path |
//! |---|---|
//! | Settings ledger | `.claude/settings.json` |
//! | Global server store | `.claude.json` |
//! | Plugin cache | `.claude/plugins/cache/` |

use crate::constants::{CLAUDE_DIR_NAME, PLUGIN_CACHE_SUBDIR, SETTINGS_FILE};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolved locations of the Claude Code configuration stores.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    claude_dir: PathBuf,
}

impl ConfigPaths {
    /// Resolve the configuration root.
    ///
    /// Uses `override_dir` when given (the `--config-dir` flag), otherwise
    /// `$HOME/.claude`.
    pub fn new(override_dir: Option<PathBuf>) -> Result<Self> {
        let claude_dir = match override_dir {
            Some(dir) => dir,
            None => dirs::home_dir()
                .context("Could not determine home directory")?
                .join(CLAUDE_DIR_NAME),
        };
        Ok(Self {
            claude_dir,
        })
    }

    /// Build paths rooted at an explicit directory. Used by tests.
    #[must_use]
    pub fn with_claude_dir(claude_dir: impl Into<PathBuf>) -> Self {
        Self {
            claude_dir: claude_dir.into(),
        }
    }

    /// The configuration directory itself (`~/.claude`).
    #[must_use]
    pub fn claude_dir(&self) -> &Path {
        &self.claude_dir
    }

    /// Path to the settings ledger (`~/.claude/settings.json`).
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.claude_dir.join(SETTINGS_FILE)
    }

    /// Path to the global server store (`~/.claude.json`).
    ///
    /// This is the sibling of the configuration directory with `.json`
    /// appended, not a file inside it.
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        let mut os = self.claude_dir.as_os_str().to_os_string();
        os.push(".json");
        PathBuf::from(os)
    }

    /// Root of the installed-plugin cache (`~/.claude/plugins/cache`).
    #[must_use]
    pub fn plugin_cache_dir(&self) -> PathBuf {
        self.claude_dir.join(PLUGIN_CACHE_SUBDIR)
    }

    /// All store paths in display order, for `config paths`.
    #[must_use]
    pub fn all_paths(&self) -> Vec<PathBuf> {
        vec![
            self.global_config_path(),
            self.settings_path(),
            self.plugin_cache_dir(),
        ]
    }
}
