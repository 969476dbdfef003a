//! Pattern Library
//!
//! An ordered catalog of named single-line recognizers for API Blueprint
//! and MSON constructs. Patterns are immutable, compiled lazily once per
//! process and shared by every caller.
//!
//! The catalog is introspectable through [`list_patterns`] and carries its
//! own sample lines, so [`verify_patterns`] can self-test every recognizer.
//!
//! # Example
//!
//! ```
//! use apib_highlight::patterns::{self, PatternKind};
//!
//! let response = patterns::match_response("+ Response 200 (application/json)").unwrap();
//! assert_eq!(response.status.as_str("+ Response 200 (application/json)"), "200");
//! assert!(PatternKind::FormatMetadata.pattern().recognizes("FORMAT: 1A"));
//! ```

mod catalog;
mod matchers;


use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{PatternError, Result};

pub use matchers::{
    find_bracketed_actions, find_flags, find_http_methods, find_numbers, find_parentheticals,
    find_path_variables, find_query_variables, find_string_literals, find_type_annotations,
    is_data_structures_header, is_flag_word, is_format_metadata, is_mime_type,
    is_reserved_section_keyword, is_type_reference, is_type_word, match_action_header,
    match_api_title, match_attribute, match_attributes_bare, match_attributes_with_type,
    match_default_value, match_group, match_host, match_parameter, match_relation,
    match_request, match_resource, match_response, match_section_keyword,
    mentions_type_word, ActionHeader, AttributesSection, BracketedAction, Definition,
    RequestLine, ResourceHeader, ResponseLine, FLAG_WORDS, MIME_TOP_LEVEL_TYPES,
    RESERVED_SECTION_KEYWORDS, TYPE_WORDS,
};

/// Identifies one recognizer in the catalog
///
/// Discriminants follow catalog order, which is also classifier priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    FormatMetadata,
    HostMetadata,
    GroupHeader,
    ResourceHeader,
    ActionHeader,
    HttpMethod,
    BracketedAction,
    UriPathVariable,
    UriQueryVariable,
    SectionKeyword,
    AttributesWithType,
    AttributesBare,
    RequestLine,
    ResponseLine,
    ParentheticalContent,
    TypeAnnotation,
    NumberLiteral,
    MsonFlag,
    ApiTitle,
    DataStructuresHeader,
    MsonAttribute,
    ParameterDefinition,
    DefaultValue,
    Relation,
    StringLiteral,
}

impl PatternKind {
    /// Number of patterns in the catalog
    pub const COUNT: usize = 25;

    /// Catalog entry for this kind
    pub fn pattern(self) -> &'static Pattern {
        &catalog::PATTERNS[self as usize]
    }

    /// Compiled regex for this kind
    pub fn regex(self) -> &'static Regex {
        &compiled()[self as usize]
    }
}

/// Semantic role of a capture group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureRole {
    Url,
    Keyword,
    Name,
    Bracket,
    Path,
    Method,
    Variable,
    TypeExpression,
    MimeType,
    StatusCode,
    Content,
    Value,
    Flag,
    Number,
    Title,
    Description,
}

/// An immutable, named recognizer over a single line
#[derive(Debug, Serialize)]
pub struct Pattern {
    pub kind: PatternKind,
    /// Stable kebab-case name
    pub name: &'static str,
    pub description: &'static str,
    /// Regex source in `regex` crate syntax
    pub source: &'static str,
    /// Capture group index to role; group 0 is the whole match
    pub roles: &'static [(usize, CaptureRole)],
    /// Lines the pattern must recognize
    pub accepts: &'static [&'static str],
    /// Lines the pattern must not recognize
    pub rejects: &'static [&'static str],
}

impl Pattern {
    pub fn regex(&self) -> &'static Regex {
        self.kind.regex()
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.source.starts_with("(?i)")
    }

    /// Whether `line` is recognized by this pattern
    ///
    /// Includes the checks the regex alone cannot express: the reserved
    /// keyword exclusion for MSON attributes and balanced parentheses for
    /// typed Attributes sections.
    pub fn recognizes(&self, line: &str) -> bool {
        match self.kind {
            PatternKind::MsonAttribute => match_attribute(line).is_some(),
            PatternKind::AttributesWithType => match_attributes_with_type(line).is_some(),
            _ => self.regex().is_match(line),
        }
    }

    /// Run this pattern's sample lines
    pub fn check(&'static self) -> Result<()> {
        if let Some(sample) = self.accepts.iter().find(|s| !self.recognizes(s)) {
            return Err(PatternError::MissedSample {
                pattern: self.name,
                sample,
            });
        }
        if let Some(sample) = self.rejects.iter().find(|s| self.recognizes(s)) {
            return Err(PatternError::UnexpectedMatch {
                pattern: self.name,
                sample,
            });
        }
        Ok(())
    }
}

/// The whole catalog in classifier priority order
pub fn list_patterns() -> &'static [Pattern] {
    &catalog::PATTERNS
}

/// Look a pattern up by its kebab-case name
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    catalog::PATTERNS.iter().find(|p| p.name == name)
}

/// Self-test every pattern against its samples, stopping at the first failure
pub fn verify_patterns() -> Result<()> {
    catalog::PATTERNS.iter().try_for_each(Pattern::check)
}

fn compiled() -> &'static [Regex] {
    static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        catalog::PATTERNS
            .iter()
            .map(|p| Regex::new(p.source).expect("catalog regex must compile"))
            .collect()
    })
}
