//! Error types for the highlighting core
//!
//! Classification itself never fails; these cover category parsing and the
//! pattern self-test harness.

use thiserror::Error;

/// Error parsing a category identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCategoryError {
    /// The identifier names no known category
    #[error("Unknown category: {0}")]
    Unknown(String),
}

/// Failure reported by the pattern self-test harness
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A sample line the pattern must recognize was not recognized
    #[error("Pattern '{pattern}' should match sample: {sample:?}")]
    MissedSample {
        pattern: &'static str,
        sample: &'static str,
    },

    /// A sample line the pattern must ignore was recognized
    #[error("Pattern '{pattern}' should not match sample: {sample:?}")]
    UnexpectedMatch {
        pattern: &'static str,
        sample: &'static str,
    },
}

/// Result type for pattern self-checks
pub type Result<T> = std::result::Result<T, PatternError>;
