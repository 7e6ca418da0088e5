//! Error handling for mcpctl
//!
//! This module provides the error types and user-friendly error reporting
//! for the MCP configuration manager. The error system is designed around
//! two core principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`McpctlError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and
//!   suggestions
//!
//! # Error Taxonomy
//!
//! - [`McpctlError::PluginNotFound`] / [`McpctlError::ServerNotFound`] -
//!   a referenced plugin or server is absent from its store
//! - [`McpctlError::ServerAlreadyExists`] - add attempted on an existing name
//! - [`McpctlError::ParseError`] - malformed JSON in a store the engine must
//!   trust
//! - [`McpctlError::ConfigNotFound`] - a mutation targeted a store file that
//!   does not exist (mutations never create stores from nothing)
//! - [`McpctlError::IoError`] - file unreadable/unwritable for reasons other
//!   than absence
//! - [`McpctlError::NetworkError`] - npm registry or health probe failures
//!
//! Missing files are **not** errors on read paths with a sensible empty
//! default; the settings store and the aggregator return empty results
//! instead. Use [`user_friendly_error`] to convert any error into a
//! displayable format with contextual suggestions.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for mcpctl operations.
///
/// Each variant represents a specific failure mode and carries enough
/// context (names, paths, reasons) for an actionable message. Variants are
/// matched by [`user_friendly_error`] to attach suggestions before display.
#[derive(Error, Debug)]
pub enum McpctlError {
    /// Referenced plugin id is absent from the settings ledger.
    ///
    /// Toggling never registers unknown plugins; only an installed plugin
    /// (or an explicit `install`) creates entries.
    #[error("Plugin '{id}' not found in settings")]
    PluginNotFound {
        /// The plugin id that could not be found (`name@publisher`)
        id: String,
    },

    /// Referenced MCP server is absent from the global store.
    #[error("MCP server '{name}' not found")]
    ServerNotFound {
        /// Name of the server that could not be found
        name: String,
    },

    /// Add attempted on a server name that already exists.
    #[error("MCP server '{name}' already exists")]
    ServerAlreadyExists {
        /// Name of the conflicting server
        name: String,
    },

    /// A store contained JSON the engine could not parse.
    #[error("Invalid JSON in {file}: {reason}")]
    ParseError {
        /// Path to the file that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// A mutation targeted a configuration file that does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to the missing configuration file
        path: String,
    },

    /// Network operation failed (npm registry, health probe).
    #[error("Network error during {operation}: {reason}")]
    NetworkError {
        /// The network operation that failed
        operation: String,
        /// Reason for the network failure
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Rich error context with user-friendly messaging.
///
/// Wraps an [`McpctlError`] with an optional suggestion and details,
/// displayed in color on stderr by the CLI entry point.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: McpctlError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from a [`McpctlError`].
    #[must_use]
    pub const fn new(error: McpctlError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions should be actionable steps the user can take; they are
    /// displayed in green to draw attention.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable
/// suggestions.
///
/// This is the main entry point for converting arbitrary errors into
/// user-friendly messages for CLI display. It recognizes [`McpctlError`]
/// variants and common [`std::io::Error`] kinds; everything else gets a
/// generic wrapper that still avoids stack traces.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(mcpctl_error) = error.downcast_ref::<McpctlError>() {
        return create_error_context(mcpctl_error);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(McpctlError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check file ownership and permissions on your Claude configuration directory")
                .with_details("mcpctl does not have permission to read or write a configuration file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(McpctlError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    ErrorContext::new(McpctlError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: &McpctlError) -> ErrorContext {
    match error {
        McpctlError::PluginNotFound { id } => ErrorContext::new(McpctlError::PluginNotFound {
            id: id.clone(),
        })
        .with_suggestion("Run 'mcpctl list --plugins' to see the plugins known to Claude Code")
        .with_details("Only plugins already present in settings.json can be toggled"),

        McpctlError::ServerNotFound { name } => ErrorContext::new(McpctlError::ServerNotFound {
            name: name.clone(),
        })
        .with_suggestion("Run 'mcpctl list' to see configured servers"),

        McpctlError::ServerAlreadyExists { name } => {
            ErrorContext::new(McpctlError::ServerAlreadyExists {
                name: name.clone(),
            })
            .with_suggestion(format!("Run 'mcpctl remove {name}' first to reinstall it"))
        }

        McpctlError::ParseError { file, reason } => ErrorContext::new(McpctlError::ParseError {
            file: file.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Fix the JSON syntax in the file, or restore it from a backup")
        .with_details("mcpctl refuses to rewrite a store it cannot fully parse, to avoid losing data"),

        McpctlError::ConfigNotFound { path } => ErrorContext::new(McpctlError::ConfigNotFound {
            path: path.clone(),
        })
        .with_suggestion("Start Claude Code once to create its configuration files")
        .with_details("Mutations require an existing configuration file; mcpctl never creates stores from nothing"),

        McpctlError::NetworkError { operation, reason } => {
            ErrorContext::new(McpctlError::NetworkError {
                operation: operation.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Check your internet connection and try again")
        }

        McpctlError::IoError(e) => ErrorContext::new(McpctlError::Other {
            message: e.to_string(),
        })
        .with_suggestion("Check file permissions on your Claude configuration directory"),

        McpctlError::Other { message } => ErrorContext::new(McpctlError::Other {
            message: message.clone(),
        }),
    }
}
