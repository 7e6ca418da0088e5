//! Search the npm registry for MCP packages.

use crate::registry::RegistryClient;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

/// Search npm for MCP-related packages.
///
/// The query is combined with the "mcp" keyword, so a search for
/// "kubernetes" finds kubernetes MCP servers rather than kubernetes
/// itself.
#[derive(Parser, Debug)]
pub struct SearchCommand {
    /// Search query.
    query: String,

    /// Maximum number of results.
    #[arg(short, long, default_value_t = 10)]
    limit: usize,
}

impl SearchCommand {
    /// Execute the search command.
    pub async fn execute(self) -> Result<()> {
        let client = RegistryClient::new()?;

        println!("Searching npm for MCP packages matching '{}'...\n", self.query);

        let results = client.search(&self.query, self.limit).await?;

        if results.objects.is_empty() {
            println!("No packages found.");
            return Ok(());
        }

        println!("Found {} package(s):\n", results.objects.len());

        for object in &results.objects {
            let package = &object.package;

            println!("  {}@{}", package.name.bold(), package.version);

            if !package.description.is_empty() {
                let mut description: String = package.description.chars().take(70).collect();
                if description.len() < package.description.len() {
                    description.push_str("...");
                }
                println!("    {description}");
            }

            println!(
                "    Score: {:.2} (quality: {:.2}, popularity: {:.2})",
                object.score.r#final, object.score.detail.quality, object.score.detail.popularity
            );

            if package.name.to_lowercase().contains("mcp") {
                println!("    Usage: npx {}", package.name);
            }

            println!();
        }

        println!("Total: {} packages found", results.total);
        println!("\nUse 'mcpctl info <package>' for more details.");

        Ok(())
    }
}
