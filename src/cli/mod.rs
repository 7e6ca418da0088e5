//! Command-line interface for mcpctl.
//!
//! Each command is implemented as a separate module with its own argument
//! structure and execution logic. Commands receive a resolved
//! [`ConfigPaths`] handle instead of reading global state, which keeps
//! them testable against temporary configuration roots.
//!
//! # Available Commands
//!
//! ## Servers
//! - `list` - list configured MCP servers from all sources
//! - `install` / `remove` - add or remove servers in the global store
//! - `server status` / `server info` - inspect configuration and health
//!
//! ## Plugins
//! - `enable` / `disable` / `status` - toggle plugins in the settings
//!   ledger
//!
//! ## Registry
//! - `search` / `info` - discover MCP packages on npm
//! - `update` - bump npx-based servers to the latest published version
//!
//! ## Configuration
//! - `config show|paths|export|import|validate`
//!
//! # Global Options
//!
//! - `--config-dir` - use an alternate Claude configuration directory
//! - `--verbose` / `--quiet` - logging verbosity

mod config;
mod disable;
mod enable;
mod info;
mod install;
mod list;
mod remove;
mod search;
mod server;
mod status;
mod update;

use crate::config::ConfigPaths;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI application structure for mcpctl.
///
/// Handles global flags and delegates to subcommands for specific
/// operations.
#[derive(Parser)]
#[command(
    name = "mcpctl",
    about = "MCP server configuration manager for Claude Code",
    version,
    long_about = "mcpctl manages MCP (Model Context Protocol) servers used by Claude Code: \
                  listing them across configuration sources, toggling plugins, installing \
                  and removing servers, and keeping npm-based servers up to date."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    ///
    /// Shows per-source read failures and other internal detail the
    /// aggregator normally degrades over silently.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the Claude configuration directory.
    ///
    /// Defaults to `~/.claude`. The global server store is resolved as
    /// the sibling `<dir>.json` of this directory.
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,
}

/// Available subcommands for the mcpctl CLI.
#[derive(Subcommand)]
enum Commands {
    /// List MCP servers from all configuration sources.
    List(list::ListCommand),

    /// Enable an MCP plugin in Claude Code settings.
    Enable(enable::EnableCommand),

    /// Disable an MCP plugin in Claude Code settings.
    Disable(disable::DisableCommand),

    /// Show the enabled/disabled state of a plugin.
    Status(status::StatusCommand),

    /// Install an MCP server into the global configuration.
    Install(install::InstallCommand),

    /// Remove an MCP server from the global configuration.
    Remove(remove::RemoveCommand),

    /// Search for MCP packages on the npm registry.
    Search(search::SearchCommand),

    /// Show npm registry information about a package.
    Info(info::InfoCommand),

    /// Update npx-based MCP servers to their latest version.
    Update(update::UpdateCommand),

    /// Inspect server configuration and health.
    Server(server::ServerCommand),

    /// Show, export, import, and validate configuration.
    Config(config::ConfigCommand),
}

impl Cli {
    /// Execute the parsed command.
    pub async fn execute(self) -> Result<()> {
        self.init_logging();

        let paths = ConfigPaths::new(self.config_dir.clone())?;

        match self.command {
            Commands::List(cmd) => cmd.execute(&paths),
            Commands::Enable(cmd) => cmd.execute(&paths),
            Commands::Disable(cmd) => cmd.execute(&paths),
            Commands::Status(cmd) => cmd.execute(&paths),
            Commands::Install(cmd) => cmd.execute(&paths),
            Commands::Remove(cmd) => cmd.execute(&paths),
            Commands::Search(cmd) => cmd.execute().await,
            Commands::Info(cmd) => cmd.execute().await,
            Commands::Update(cmd) => cmd.execute(&paths).await,
            Commands::Server(cmd) => cmd.execute(&paths).await,
            Commands::Config(cmd) => cmd.execute(&paths).await,
        }
    }

    /// Initialize tracing from the verbosity flags.
    ///
    /// An explicit `RUST_LOG` always wins over the flags.
    fn init_logging(&self) {
        use tracing_subscriber::EnvFilter;

        let default_level = if self.verbose {
            "mcpctl=debug"
        } else if self.quiet {
            "mcpctl=error"
        } else {
            "mcpctl=warn"
        };

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}
