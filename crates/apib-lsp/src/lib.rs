//! apib Language Server Protocol implementation
//!
//! Publishes semantic tokens for API Blueprint documents so any LSP editor
//! can highlight them:
//! - FULL text sync, documents kept in memory
//! - full-document and range semantic token requests
//! - one token type per classifier category
//! - `apib.toml` settings discovered from the workspace root
//!
//! # Library Usage
//!
//! ```ignore
//! use apib_lsp::run_server;
//!
//! run_server().await;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Start the language server (typically called by an editor)
//! apib-lsp
//!
//! # With debug logging
//! RUST_LOG=debug apib-lsp
//! ```

pub mod config;
pub mod semantic;
pub mod server;

pub use config::Settings;
pub use server::{init_tracing, run_server, Backend};
