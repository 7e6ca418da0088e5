//! Show npm registry metadata for a package.

use crate::registry::RegistryClient;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

/// Display detailed information about an npm package.
///
/// Fetches package metadata from the npm registry including version,
/// description, repository, and an MCP usage hint.
#[derive(Parser, Debug)]
pub struct InfoCommand {
    /// Package name (e.g. @upstash/context7-mcp).
    package: String,
}

impl InfoCommand {
    /// Execute the info command.
    pub async fn execute(self) -> Result<()> {
        let client = RegistryClient::new()?;

        println!("Fetching information for '{}'...\n", self.package);

        let package = client.get_package(&self.package).await?;

        println!("Package: {}", package.name.bold());
        if let Some(version) = package.latest_version() {
            println!("Version: {version}");
        }
        if !package.license.is_empty() {
            println!("License: {}", package.license);
        }

        if !package.description.is_empty() {
            println!("\nDescription:\n  {}", package.description);
        }

        if let Some(author) = &package.author
            && !author.name.is_empty()
        {
            if author.email.is_empty() {
                println!("\nAuthor: {}", author.name);
            } else {
                println!("\nAuthor: {} <{}>", author.name, author.email);
            }
        }

        println!("\nLinks:");
        println!("  npm: https://www.npmjs.com/package/{}", package.name);
        if !package.homepage.is_empty() {
            println!("  homepage: {}", package.homepage);
        }
        if !package.repository.url.is_empty() {
            let repo = package
                .repository
                .url
                .trim_start_matches("git+")
                .trim_end_matches(".git");
            println!("  repository: {repo}");
        }

        if package.name.to_lowercase().contains("mcp") {
            println!("\nUsage with Claude Code:");
            println!("  mcpctl install <name> {}", package.name);
        }

        println!("\nVersions: {} available", package.versions.len());

        Ok(())
    }
}
