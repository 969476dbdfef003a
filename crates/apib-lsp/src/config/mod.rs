//! Configuration
//!
//! Settings are loaded from `apib.toml` (or `.apib.toml`) in the workspace
//! root or any of its ancestors:
//!
//! ```toml
//! [highlight]
//! disabled = ["number-literal"]
//! max_line_length = 4000
//!
//! [theme.styles]
//! http-method = { foreground = "green", bold = true }
//! status-code = { foreground = "#6897BB" }
//! ```
//!
//! Every section is optional; missing keys fall back to defaults.

mod settings;
mod theme;


pub use settings::{ConfigError, HighlightSettings, Settings, CONFIG_FILE_NAMES};
pub use theme::{StyleSpec, Theme};
