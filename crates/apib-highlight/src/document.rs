//! Document splitting
//!
//! The classifier only ever sees one line. This module is the caller side:
//! it splits text on `\n`, tracks each line's absolute offset and feeds
//! non-blank lines to [`classify_line`].

use crate::annotation::Annotation;
use crate::classifier::classify_line;

/// One line of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineContext<'a> {
    /// Zero-based line number within the split text
    pub number: usize,
    /// Absolute byte offset of the line's first character
    pub offset: usize,
    /// Line text without its terminator (`\n` or `\r\n`)
    pub text: &'a str,
}

impl LineContext<'_> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn classify(&self) -> Vec<Annotation> {
        classify_line(self.text, self.offset)
    }
}

/// Split `text` into lines, starting offsets at `base_offset`
///
/// Offsets advance by each raw line's byte length plus one for the `\n`.
/// A trailing `\r` is kept out of the line text but still counted.
pub fn lines(text: &str, base_offset: usize) -> impl Iterator<Item = LineContext<'_>> {
    let mut offset = base_offset;
    text.split('\n').enumerate().map(move |(number, raw)| {
        let line = LineContext {
            number,
            offset,
            text: raw.strip_suffix('\r').unwrap_or(raw),
        };
        offset += raw.len() + 1;
        line
    })
}

/// Classify every non-blank line of `text`
///
/// # Example
///
/// ```
/// use apib_highlight::{classify_text, Category};
///
/// let text = "FORMAT: 1A\n\n# Coupon API";
/// let annotations = classify_text(text, 0);
/// assert_eq!(annotations[0].category, Category::Metadata);
/// assert_eq!(annotations[1].text(text), Some("Coupon API"));
/// ```
pub fn classify_text(text: &str, base_offset: usize) -> Vec<Annotation> {
    lines(text, base_offset)
        .filter(|line| !line.is_blank())
        .flat_map(|line| line.classify())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_lines_offsets() {
        let text = "ab\n\ncd\r\nef";
        let lines: Vec<_> = lines(text, 10).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!((lines[0].offset, lines[0].text), (10, "ab"));
        assert_eq!((lines[1].offset, lines[1].text), (13, ""));
        assert_eq!((lines[2].offset, lines[2].text), (14, "cd"));
        assert_eq!((lines[3].offset, lines[3].text), (18, "ef"));
        assert_eq!(lines[3].number, 3);
    }

    #[test]
    fn test_classify_text_translates_offsets() {
        let text = "# Coupon API\n\n    + percent_off: 25 (number)";
        let annotations = classify_text(text, 0);
        let name = annotations
            .iter()
            .find(|a| a.category == Category::ParameterName)
            .unwrap();
        assert_eq!(name.text(text), Some("percent_off"));
    }

    #[test]
    fn test_crlf_lines_classify_like_lf() {
        let lf = classify_text("FORMAT: 1A\n# Coupon API", 0);
        let crlf = classify_text("FORMAT: 1A\r\n# Coupon API", 0);
        assert_eq!(lf.len(), crlf.len());
        assert_eq!(crlf[1].start, lf[1].start + 1);
        assert_eq!(crlf[1].len(), lf[1].len());
    }
}
