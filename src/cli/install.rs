//! Install an MCP server into the global store.

use crate::config::ConfigPaths;
use crate::mcp::models::ServerEntry;
use crate::mcp::GlobalStore;
use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;

/// Install an MCP server to Claude Code configuration.
///
/// By default this installs an npx-based server:
///
/// ```bash
/// mcpctl install context7 @upstash/context7-mcp
/// ```
///
/// Other transports:
///
/// ```bash
/// # HTTP-based server
/// mcpctl install myapi --http --url https://api.example.com/mcp
///
/// # uvx-based (Python) server
/// mcpctl install serena --uvx serena-mcp
///
/// # Custom command server
/// mcpctl install myserver --command node --args server.js,--port,8080
/// ```
#[derive(Parser, Debug)]
pub struct InstallCommand {
    /// Server name to register.
    name: String,

    /// npm package (npx installs) or uvx package name.
    package: Option<String>,

    /// Install as an HTTP-based server.
    #[arg(long, conflicts_with_all = ["uvx", "command"])]
    http: bool,

    /// URL for the HTTP server (required with --http).
    #[arg(long, requires = "http")]
    url: Option<String>,

    /// Install as a uvx (Python) server.
    #[arg(long, conflicts_with = "command")]
    uvx: bool,

    /// Custom command to launch the server (e.g. node, python).
    #[arg(long)]
    command: Option<String>,

    /// Arguments for the custom command.
    #[arg(long, value_delimiter = ',')]
    args: Vec<String>,
}

impl InstallCommand {
    /// Execute the install command.
    pub fn execute(self, paths: &ConfigPaths) -> Result<()> {
        let store = GlobalStore::new(paths.global_config_path());
        let entry = self.build_entry()?;

        println!("Installing MCP server '{}'...", self.name);
        store.add_server(&self.name, &entry)?;

        println!("MCP server '{}' has been {}.", self.name, "installed".green());
        print_entry(&self.name, &entry);
        println!("\nNote: Restart Claude Code for the new server to be available.");

        Ok(())
    }

    /// Translate the flags into a store entry.
    fn build_entry(&self) -> Result<ServerEntry> {
        if self.http {
            let Some(url) = self.url.clone() else {
                bail!("--url is required for HTTP servers");
            };
            return Ok(ServerEntry {
                server_type: Some("http".to_string()),
                url: Some(url),
                ..Default::default()
            });
        }

        if self.uvx {
            let package = self.package.clone().unwrap_or_else(|| self.name.clone());
            return Ok(ServerEntry {
                command: Some("uvx".to_string()),
                args: vec![package],
                ..Default::default()
            });
        }

        if let Some(command) = self.command.clone() {
            return Ok(ServerEntry {
                command: Some(command),
                args: self.args.clone(),
                ..Default::default()
            });
        }

        // Default: npx server. The package argument is mandatory here
        // since the server name alone rarely matches an npm package.
        let Some(package) = self.package.clone() else {
            bail!(
                "package name required for npx install (e.g. mcpctl install {} @package/name)",
                self.name
            );
        };
        Ok(ServerEntry {
            command: Some("npx".to_string()),
            args: vec!["-y".to_string(), package],
            ..Default::default()
        })
    }
}

fn print_entry(name: &str, entry: &ServerEntry) {
    println!("\nConfiguration:");
    println!("  Name: {name}");
    if let Some(server_type) = &entry.server_type {
        println!("  Type: {server_type}");
    }
    if let Some(command) = &entry.command {
        println!("  Command: {command}");
    }
    if !entry.args.is_empty() {
        println!("  Args: {}", entry.args.join(" "));
    }
    if let Some(url) = &entry.url {
        println!("  URL: {url}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> InstallCommand {
        InstallCommand::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_default_npx_entry() {
        let cmd = parse(&["install", "context7", "@upstash/context7-mcp"]);
        let entry = cmd.build_entry().unwrap();
        assert_eq!(entry.command.as_deref(), Some("npx"));
        assert_eq!(entry.args, vec!["-y", "@upstash/context7-mcp"]);
        assert!(entry.server_type.is_none());
    }

    #[test]
    fn test_npx_requires_package() {
        let cmd = parse(&["install", "context7"]);
        assert!(cmd.build_entry().is_err());
    }

    #[test]
    fn test_http_entry() {
        let cmd = parse(&["install", "myapi", "--http", "--url", "https://api.example.com/mcp"]);
        let entry = cmd.build_entry().unwrap();
        assert_eq!(entry.server_type.as_deref(), Some("http"));
        assert_eq!(entry.url.as_deref(), Some("https://api.example.com/mcp"));
        assert!(entry.command.is_none());
    }

    #[test]
    fn test_uvx_defaults_to_server_name() {
        let cmd = parse(&["install", "serena", "--uvx"]);
        let entry = cmd.build_entry().unwrap();
        assert_eq!(entry.command.as_deref(), Some("uvx"));
        assert_eq!(entry.args, vec!["serena"]);
    }

    #[test]
    fn test_custom_command_with_args() {
        let cmd = parse(&[
            "install", "mine", "--command", "node", "--args", "server.js,--port,8080",
        ]);
        let entry = cmd.build_entry().unwrap();
        assert_eq!(entry.command.as_deref(), Some("node"));
        assert_eq!(entry.args, vec!["server.js", "--port", "8080"]);
    }
}
