//! apib-highlight - API Blueprint token classification
//!
//! Recognizes the lexical structure of API Blueprint (metadata, resource and
//! action headers, MSON attributes, HTTP methods, URI templates, media types,
//! status codes, flags and string literals) inside Markdown, and maps byte
//! ranges to semantic [`Category`] tags for presentation.
//!
//! The core is a pure function of `(line, offset)`: no state, no I/O, safe to
//! call from any number of threads. Hosts split documents into lines (or use
//! [`classify_text`]), map categories to styles and paint the ranges.
//!
//! # Example
//!
//! ```
//! use apib_highlight::{classify_line, Category};
//!
//! let line = "    + id: 250FF (string, required)";
//! let found: Vec<_> = classify_line(line, 0)
//!     .into_iter()
//!     .map(|a| (&line[a.range()], a.category))
//!     .collect();
//!
//! assert!(found.contains(&("id", Category::ParameterName)));
//! assert!(found.contains(&("250FF", Category::StringValue)));
//! assert!(found.contains(&("string", Category::TypeAnnotation)));
//! assert!(found.contains(&("required", Category::FlagKeyword)));
//! ```

pub mod annotation;
pub mod category;
pub mod classifier;
pub mod document;
pub mod error;
pub mod overlay;
pub mod patterns;

pub use annotation::{Annotation, Span};
pub use category::Category;
pub use classifier::classify_line;
pub use document::{classify_text, lines, LineContext};
pub use error::{ParseCategoryError, PatternError};
pub use overlay::flatten;
pub use patterns::{list_patterns, verify_patterns, Pattern, PatternKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
