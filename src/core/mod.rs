//! Core types and error handling for mcpctl.
//!
//! This module hosts the error taxonomy shared by the stores, the
//! aggregator, and the CLI, plus the user-friendly error reporting used at
//! the top level of the binary.

pub mod error;

pub use error::{ErrorContext, McpctlError, user_friendly_error};
