//! Semantic categories emitted by the classifier
//!
//! A category is a presentation-neutral tag. Hosts map each one to a visual
//! style; the classifier never sees a style.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseCategoryError;

/// Semantic tag attached to an annotated range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// `FORMAT: 1A` and `HOST: ...` lines
    Metadata,
    /// Name of a `# Group ...` header
    GroupHeader,
    /// Bracketed resource path or `[METHOD /path]` block
    ResourcePath,
    /// GET, POST, PUT, ...
    HttpMethod,
    /// `{id}` and `{?page,size}` template variables
    UriVariable,
    /// Parameters, Attributes, Request, Response, Headers, Body, Schema
    SectionKeyword,
    /// `application/json` and friends
    MimeType,
    /// Three-digit response status
    StatusCode,
    /// Value of a `+ Relation:` line
    Relation,
    /// `(number)`, `(string)`, ... and base types inside a type blob
    TypeAnnotation,
    /// Integer or decimal literal
    NumberLiteral,
    /// Named MSON type such as `Coupon`
    MsonTypeReference,
    /// Name of a parameter or MSON attribute
    ParameterName,
    /// MSON property; available to hosts, not produced by any rule
    MsonProperty,
    /// required, optional, nullable, default, sample
    FlagKeyword,
    /// Quoted, backticked or sample string value
    StringValue,
    /// Title of the API (`# My API`)
    ApiName,
    /// Name of a `### Action [METHOD]` header
    ActionName,
    /// `# Data Structures`
    DataStructuresHeader,
}

impl Category {
    /// Every category, in a stable order hosts can index into
    pub const ALL: [Category; 19] = [
        Category::Metadata,
        Category::GroupHeader,
        Category::ResourcePath,
        Category::HttpMethod,
        Category::UriVariable,
        Category::SectionKeyword,
        Category::MimeType,
        Category::StatusCode,
        Category::Relation,
        Category::TypeAnnotation,
        Category::NumberLiteral,
        Category::MsonTypeReference,
        Category::ParameterName,
        Category::MsonProperty,
        Category::FlagKeyword,
        Category::StringValue,
        Category::ApiName,
        Category::ActionName,
        Category::DataStructuresHeader,
    ];

    /// Stable kebab-case identifier
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Metadata => "metadata",
            Category::GroupHeader => "group-header",
            Category::ResourcePath => "resource-path",
            Category::HttpMethod => "http-method",
            Category::UriVariable => "uri-variable",
            Category::SectionKeyword => "section-keyword",
            Category::MimeType => "mime-type",
            Category::StatusCode => "status-code",
            Category::Relation => "relation",
            Category::TypeAnnotation => "type-annotation",
            Category::NumberLiteral => "number-literal",
            Category::MsonTypeReference => "mson-type-reference",
            Category::ParameterName => "parameter-name",
            Category::MsonProperty => "mson-property",
            Category::FlagKeyword => "flag-keyword",
            Category::StringValue => "string-value",
            Category::ApiName => "api-name",
            Category::ActionName => "action-name",
            Category::DataStructuresHeader => "data-structures-header",
        }
    }

    /// Position of this category in [`Category::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCategoryError::Unknown(s.to_string()))
    }
}
