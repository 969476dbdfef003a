//! apib CLI - Command-line interface library
//!
//! This library provides the CLI functionality for apib, including:
//! - Classify: list every annotation in a blueprint
//! - Highlight: paint a blueprint in the terminal
//! - Patterns: list and self-check the pattern catalog
//! - Line: classify a single line
//!
//! # Library Usage
//!
//! ```ignore
//! use apib_cli::{run_cli, OutputFormat};
//!
//! // Run the full CLI
//! run_cli()?;
//!
//! // Or use individual commands programmatically
//! classify_command(&input, OutputFormat::Json)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # List annotations as JSON
//! apib classify api.apib --format json
//!
//! # Paint in the terminal with a custom theme
//! apib highlight api.apib --config apib.toml
//!
//! # Self-test the pattern catalog
//! apib patterns --check
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{
    classify_command, highlight_command, line_command, patterns_command, run_cli, OutputFormat,
};
pub use app::{
    content_style, document_entries, highlight_document, line_entries, render_entries,
    render_patterns, Entry,
};
