//! Annotation records and line-relative spans
//!
//! All offsets are UTF-8 byte offsets. A [`Span`] is relative to the start of
//! a single line; an [`Annotation`] is absolute within the whole document.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Half-open byte range `[start, end)` within one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Slice of `line` covered by this span
    pub fn as_str<'a>(&self, line: &'a str) -> &'a str {
        line.get(self.start..self.end).unwrap_or("")
    }

    /// Shrink the span so it excludes leading and trailing whitespace
    pub fn trimmed(self, line: &str) -> Span {
        let text = self.as_str(line);
        let leading = text.len() - text.trim_start().len();
        let trailing = text.len() - text.trim_end().len();
        if leading == text.len() {
            return Span::new(self.start, self.start);
        }
        Span::new(self.start + leading, self.end - trailing)
    }

    /// Translate to an absolute annotation for a line starting at `offset`
    pub fn to_annotation(self, offset: usize, category: Category) -> Annotation {
        Annotation::new(offset + self.start, offset + self.end, category)
    }
}

impl From<regex::Match<'_>> for Span {
    fn from(m: regex::Match<'_>) -> Self {
        Span::new(m.start(), m.end())
    }
}

/// A classified range of the document
///
/// Annotations may overlap; composing overlapping ranges is the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    /// Absolute start offset (inclusive)
    pub start: usize,
    /// Absolute end offset (exclusive)
    pub end: usize,
    /// Semantic category of the range
    pub category: Category,
}

impl Annotation {
    pub fn new(start: usize, end: usize, category: Category) -> Self {
        Self {
            start,
            end,
            category,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Text covered by this annotation, if the range is valid for `document`
    pub fn text<'a>(&self, document: &'a str) -> Option<&'a str> {
        document.get(self.range())
    }

    /// Same annotation moved by `delta` bytes
    pub fn shifted(&self, delta: usize) -> Annotation {
        Annotation::new(self.start + delta, self.end + delta, self.category)
    }

    /// Whether `other` lies entirely inside this annotation
    pub fn contains(&self, other: &Annotation) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
