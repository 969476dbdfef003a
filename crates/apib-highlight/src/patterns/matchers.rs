//! Typed extraction over the catalog
//!
//! Each function runs one recognizer and hands back line-relative spans with
//! named fields, so callers never index capture groups by number.

use regex::Captures;

use super::PatternKind;
use crate::annotation::Span;

/// Section keywords an MSON attribute name may not be
pub const RESERVED_SECTION_KEYWORDS: [&str; 9] = [
    "Attributes",
    "Parameters",
    "Headers",
    "Body",
    "Schema",
    "Request",
    "Response",
    "Default",
    "Relation",
];

/// MSON base type words
pub const TYPE_WORDS: [&str; 6] = ["number", "string", "boolean", "object", "array", "enum"];

/// MSON type attribute words
pub const FLAG_WORDS: [&str; 5] = ["required", "optional", "nullable", "default", "sample"];

/// Top-level media types recognized inside parentheses
pub const MIME_TOP_LEVEL_TYPES: [&str; 7] = [
    "application",
    "text",
    "image",
    "audio",
    "video",
    "multipart",
    "message",
];

/// `## <name> [<path>]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceHeader {
    pub name: Span,
    /// The bracketed path including its brackets
    pub bracket: Span,
    pub path: Span,
}

/// `### <name> [<METHOD> <path>?]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionHeader {
    pub name: Span,
    pub method: Span,
    pub path: Option<Span>,
}

/// `[<METHOD> <path>]` anywhere in a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketedAction {
    pub whole: Span,
    pub method: Span,
    pub path: Span,
}

/// `+ Attributes (<type>)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributesSection {
    pub keyword: Span,
    pub type_expression: Span,
}

/// `+ Request [<name>] [(<mime>)]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLine {
    pub keyword: Span,
    pub mime: Option<Span>,
}

/// `+ Response <code> [(<mime>)]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseLine {
    pub keyword: Span,
    pub status: Span,
    pub mime: Option<Span>,
}

/// `+ <name>[: <value>] [(<type-and-flags>)] [- <description>]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Definition {
    pub name: Span,
    pub value: Option<Span>,
    pub type_blob: Option<Span>,
    pub description: Option<Span>,
}

fn group(caps: &Captures<'_>, index: usize) -> Option<Span> {
    caps.get(index).map(Span::from)
}

fn captures(kind: PatternKind, line: &str) -> Option<Captures<'_>> {
    kind.regex().captures(line)
}

fn find_group(kind: PatternKind, line: &str, index: usize) -> Vec<Span> {
    kind.regex()
        .captures_iter(line)
        .filter_map(|caps| group(&caps, index))
        .collect()
}

/// Case-insensitive equality with one of the reserved section keywords
pub fn is_reserved_section_keyword(name: &str) -> bool {
    RESERVED_SECTION_KEYWORDS
        .iter()
        .any(|k| k.eq_ignore_ascii_case(name))
}

pub fn is_type_word(word: &str) -> bool {
    TYPE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word))
}

pub fn is_flag_word(word: &str) -> bool {
    FLAG_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word))
}

/// A capitalized identifier such as `Coupon` or `User_Base2`
pub fn is_type_reference(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Whether any whole word of `text` is a base type word
pub fn mentions_type_word(text: &str) -> bool {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .any(is_type_word)
}

/// Parenthetical content that looks like a media type
pub fn is_mime_type(content: &str) -> bool {
    content.contains('/')
        && MIME_TOP_LEVEL_TYPES.iter().any(|top| {
            content
                .strip_prefix(top)
                .is_some_and(|rest| rest.starts_with('/'))
        })
}

fn is_balanced(content: &str) -> bool {
    let mut depth = 0usize;
    for c in content.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

pub fn is_format_metadata(line: &str) -> bool {
    PatternKind::FormatMetadata.regex().is_match(line)
}

/// URL of a `HOST:` line
pub fn match_host(line: &str) -> Option<Span> {
    let caps = captures(PatternKind::HostMetadata, line)?;
    group(&caps, 1)
}

/// Name of a group header, trimmed; may be empty for a bare `# Group`
pub fn match_group(line: &str) -> Option<Span> {
    let caps = captures(PatternKind::GroupHeader, line)?;
    let name = group(&caps, 2).or_else(|| group(&caps, 3))?;
    Some(name.trimmed(line))
}

pub fn match_resource(line: &str) -> Option<ResourceHeader> {
    let caps = captures(PatternKind::ResourceHeader, line)?;
    Some(ResourceHeader {
        name: group(&caps, 1)?,
        bracket: group(&caps, 2)?,
        path: group(&caps, 3)?,
    })
}

pub fn match_action_header(line: &str) -> Option<ActionHeader> {
    let caps = captures(PatternKind::ActionHeader, line)?;
    Some(ActionHeader {
        name: group(&caps, 1)?,
        method: group(&caps, 2)?,
        path: group(&caps, 3).map(|p| p.trimmed(line)),
    })
}

pub fn find_http_methods(line: &str) -> Vec<Span> {
    find_group(PatternKind::HttpMethod, line, 1)
}

pub fn find_bracketed_actions(line: &str) -> Vec<BracketedAction> {
    PatternKind::BracketedAction
        .regex()
        .captures_iter(line)
        .filter_map(|caps| {
            Some(BracketedAction {
                whole: group(&caps, 0)?,
                method: group(&caps, 1)?,
                path: group(&caps, 2)?,
            })
        })
        .collect()
}

/// Variable names of `{name}` expressions, braces excluded
pub fn find_path_variables(line: &str) -> Vec<Span> {
    find_group(PatternKind::UriPathVariable, line, 1)
}

/// Comma lists of `{?a,b}` expressions, braces and `?` excluded
pub fn find_query_variables(line: &str) -> Vec<Span> {
    find_group(PatternKind::UriQueryVariable, line, 1)
}

/// Keyword of a `+ Parameters|Headers|Body|Schema` line
pub fn match_section_keyword(line: &str) -> Option<Span> {
    let caps = captures(PatternKind::SectionKeyword, line)?;
    group(&caps, 1)
}

/// `+ Attributes (<type>)` with a non-empty, parenthesis-balanced type
pub fn match_attributes_with_type(line: &str) -> Option<AttributesSection> {
    let caps = captures(PatternKind::AttributesWithType, line)?;
    let type_expression = group(&caps, 2)?;
    if !is_balanced(type_expression.as_str(line)) {
        return None;
    }
    Some(AttributesSection {
        keyword: group(&caps, 1)?,
        type_expression,
    })
}

/// Keyword of a bare `+ Attributes` line
pub fn match_attributes_bare(line: &str) -> Option<Span> {
    let caps = captures(PatternKind::AttributesBare, line)?;
    group(&caps, 1)
}

pub fn match_request(line: &str) -> Option<RequestLine> {
    let caps = captures(PatternKind::RequestLine, line)?;
    Some(RequestLine {
        keyword: group(&caps, 1)?,
        mime: group(&caps, 4),
    })
}

pub fn match_response(line: &str) -> Option<ResponseLine> {
    let caps = captures(PatternKind::ResponseLine, line)?;
    Some(ResponseLine {
        keyword: group(&caps, 1)?,
        status: group(&caps, 2)?,
        mime: group(&caps, 4),
    })
}

/// Contents of every `(...)` span, parentheses excluded
pub fn find_parentheticals(line: &str) -> Vec<Span> {
    find_group(PatternKind::ParentheticalContent, line, 1)
}

/// Whole `(type ...)` annotations, parentheses included
pub fn find_type_annotations(line: &str) -> Vec<Span> {
    find_group(PatternKind::TypeAnnotation, line, 0)
}

pub fn find_numbers(line: &str) -> Vec<Span> {
    find_group(PatternKind::NumberLiteral, line, 0)
}

pub fn find_flags(line: &str) -> Vec<Span> {
    find_group(PatternKind::MsonFlag, line, 1)
}

/// Title text of a `# <title>` line
pub fn match_api_title(line: &str) -> Option<Span> {
    let caps = captures(PatternKind::ApiTitle, line)?;
    group(&caps, 1).map(|t| t.trimmed(line))
}

pub fn is_data_structures_header(line: &str) -> bool {
    PatternKind::DataStructuresHeader.regex().is_match(line)
}

fn definition(caps: &Captures<'_>, line: &str) -> Option<Definition> {
    Some(Definition {
        name: group(caps, 1)?,
        value: group(caps, 2).map(|v| v.trimmed(line)),
        type_blob: group(caps, 3),
        description: group(caps, 4),
    })
}

/// MSON attribute definition; names equal to a reserved section keyword
/// (any case) are not attributes
pub fn match_attribute(line: &str) -> Option<Definition> {
    let caps = captures(PatternKind::MsonAttribute, line)?;
    let def = definition(&caps, line)?;
    if is_reserved_section_keyword(def.name.as_str(line)) {
        return None;
    }
    Some(def)
}

/// Parameter definition; same shape as an attribute, no keyword exclusion
pub fn match_parameter(line: &str) -> Option<Definition> {
    let caps = captures(PatternKind::ParameterDefinition, line)?;
    definition(&caps, line)
}

/// Backtick-quoted value of a `+ Default:` line, backticks excluded
pub fn match_default_value(line: &str) -> Option<Span> {
    let caps = captures(PatternKind::DefaultValue, line)?;
    group(&caps, 1)
}

pub fn match_relation(line: &str) -> Option<Span> {
    let caps = captures(PatternKind::Relation, line)?;
    group(&caps, 1).map(|v| v.trimmed(line))
}

/// Inner content of every quoted or backticked span
pub fn find_string_literals(line: &str) -> Vec<Span> {
    PatternKind::StringLiteral
        .regex()
        .captures_iter(line)
        .filter_map(|caps| group(&caps, 1).or_else(|| group(&caps, 2)))
        .collect()
}
