//! Cross-cutting utilities for mcpctl.
//!
//! Currently this is file-system helpers only: atomic writes and JSON
//! convenience wrappers. Everything here is synchronous; the core engine
//! does plain blocking file I/O.

pub mod fs;

pub use fs::{atomic_write, read_json_file, read_text_file, safe_write, write_json_file};
