//! npm registry client.
//!
//! MCP servers are overwhelmingly distributed as npm packages, so the
//! search/info/update commands talk to the public npm registry. This
//! client is a thin typed wrapper over two endpoints: the search API and
//! the package document. It is consumed only by those commands; the core
//! stores never touch the network.

use crate::constants::{NPM_REGISTRY_URL, REGISTRY_TIMEOUT};
use crate::core::McpctlError;
use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// Response of the registry search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    /// Matching packages with their scores
    #[serde(default)]
    pub objects: Vec<PackageObject>,
    /// Total number of matches on the registry side
    #[serde(default)]
    pub total: u64,
}

/// One search hit.
#[derive(Debug, Deserialize)]
pub struct PackageObject {
    /// Package metadata
    pub package: PackageInfo,
    /// Registry quality/popularity scoring
    #[serde(default)]
    pub score: Score,
}

/// Package metadata as returned by search.
#[derive(Debug, Deserialize)]
pub struct PackageInfo {
    /// Package name
    pub name: String,
    /// Latest published version
    #[serde(default)]
    pub version: String,
    /// Short description
    #[serde(default)]
    pub description: String,
}

/// Registry score for a search hit.
#[derive(Debug, Default, Deserialize)]
pub struct Score {
    /// Combined score
    #[serde(default)]
    pub r#final: f64,
    /// Score components
    #[serde(default)]
    pub detail: ScoreDetail,
}

/// Components of a registry score.
#[derive(Debug, Default, Deserialize)]
pub struct ScoreDetail {
    #[serde(default)]
    pub quality: f64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub maintenance: f64,
}

/// Full package document from the registry.
#[derive(Debug, Deserialize)]
pub struct PackageDetail {
    /// Package name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Dist tags, `latest` being the interesting one
    #[serde(default, rename = "dist-tags")]
    pub dist_tags: HashMap<String, String>,
    /// All published versions (only the count is displayed)
    #[serde(default)]
    pub versions: HashMap<String, serde_json::Value>,
    /// Homepage URL
    #[serde(default)]
    pub homepage: String,
    /// License identifier
    #[serde(default)]
    pub license: String,
    /// Repository link
    #[serde(default)]
    pub repository: Repository,
    /// Package author
    #[serde(default)]
    pub author: Option<Author>,
}

/// Repository link of a package.
#[derive(Debug, Default, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub url: String,
}

/// Package author.
#[derive(Debug, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl PackageDetail {
    /// The version tagged `latest`, if any.
    #[must_use]
    pub fn latest_version(&self) -> Option<&str> {
        self.dist_tags.get("latest").map(String::as_str)
    }
}

/// Client for the npm registry.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a client against the public npm registry.
    pub fn new() -> Result<Self> {
        Self::with_base_url(NPM_REGISTRY_URL)
    }

    /// Create a client against a custom registry URL. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REGISTRY_TIMEOUT)
            .build()
            .map_err(|e| McpctlError::NetworkError {
                operation: "registry client setup".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Search the registry for MCP-related packages.
    ///
    /// The query is widened with the "mcp" keyword so results stay on
    /// topic even for generic searches like "kubernetes".
    pub async fn search(&self, query: &str, limit: usize) -> Result<SearchResult> {
        let url = format!(
            "{}/-/v1/search?text={}&size={}",
            self.base_url,
            urlencode(&format!("{query} mcp")),
            limit
        );

        let response = self.http.get(&url).send().await.map_err(|e| McpctlError::NetworkError {
            operation: "npm search".to_string(),
            reason: e.to_string(),
        })?;

        if !response.status().is_success() {
            return Err(McpctlError::NetworkError {
                operation: "npm search".to_string(),
                reason: format!("registry returned HTTP {}", response.status()),
            }
            .into());
        }

        let result = response.json().await.map_err(|e| McpctlError::NetworkError {
            operation: "npm search".to_string(),
            reason: format!("invalid registry response: {e}"),
        })?;

        Ok(result)
    }

    /// Fetch the full package document for `name`.
    pub async fn get_package(&self, name: &str) -> Result<PackageDetail> {
        let url = format!("{}/{}", self.base_url, urlencode(name));

        let response = self.http.get(&url).send().await.map_err(|e| McpctlError::NetworkError {
            operation: "npm package lookup".to_string(),
            reason: e.to_string(),
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(McpctlError::NetworkError {
                operation: "npm package lookup".to_string(),
                reason: format!("package '{name}' not found on the registry"),
            }
            .into());
        }
        if !response.status().is_success() {
            return Err(McpctlError::NetworkError {
                operation: "npm package lookup".to_string(),
                reason: format!("registry returned HTTP {}", response.status()),
            }
            .into());
        }

        let detail = response.json().await.map_err(|e| McpctlError::NetworkError {
            operation: "npm package lookup".to_string(),
            reason: format!("invalid registry response: {e}"),
        })?;

        Ok(detail)
    }
}

/// Percent-encode a query component. Scoped package names keep their `@`
/// and `/` readable on the registry, which accepts both encoded and plain
/// forms; everything outside the unreserved set is encoded.
fn urlencode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'@' | b'/' => {
                out.push(byte as char);
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
