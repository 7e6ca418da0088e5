//! mcpctl CLI entry point
//!
//! This is the main executable for the MCP server configuration manager.
//! It handles command-line argument parsing, error display, and command
//! execution.
//!
//! The CLI supports various commands for managing MCP servers:
//! - `list` - List configured MCP servers from all sources
//! - `enable` / `disable` - Toggle a plugin in the settings ledger
//! - `install` / `remove` - Add or remove servers in the global store
//! - `search` / `info` / `update` - npm registry integration
//! - `server` - Inspect server configuration and health
//! - `config` - Show, export, import, and validate configuration

use anyhow::Result;
use clap::Parser;
use mcpctl::cli;
use mcpctl::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
