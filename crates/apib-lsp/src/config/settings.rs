//! Configuration settings

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use apib_highlight::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::theme::Theme;

/// File names tried by [`Settings::discover`], in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["apib.toml", ".apib.toml"];

/// Errors raised while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Which annotations hosts paint
    pub highlight: HighlightSettings,
    /// Category to style mapping
    pub theme: Theme,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find the nearest config file at or above `dir`
    pub fn find(dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .flat_map(|ancestor| CONFIG_FILE_NAMES.iter().map(move |name| ancestor.join(name)))
            .find(|candidate| candidate.is_file())
    }

    /// Load the nearest config file at or above `dir`, or the defaults
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        match Self::find(dir) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Painting filters
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HighlightSettings {
    /// Categories hosts should not paint
    pub disabled: Vec<Category>,
    /// Lines longer than this many bytes are left unpainted
    pub max_line_length: Option<usize>,
}

impl HighlightSettings {
    pub fn is_enabled(&self, category: Category) -> bool {
        !self.disabled.contains(&category)
    }

    /// Whether a line of `len` bytes should be classified at all
    pub fn accepts_line(&self, len: usize) -> bool {
        self.max_line_length.map_or(true, |max| len <= max)
    }
}
