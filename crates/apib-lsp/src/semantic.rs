//! Semantic tokens
//!
//! Turns classifier annotations into LSP semantic tokens:
//! - one custom token type per [`Category`], indexed in `Category::ALL` order
//! - overlaps flattened per line (innermost annotation wins)
//! - byte columns converted to UTF-16 code units
//! - delta-encoded relative to the previous token

use apib_highlight::{flatten, lines, Category};
use tower_lsp::lsp_types::{Range, SemanticToken, SemanticTokenType, SemanticTokensLegend};

use crate::config::HighlightSettings;

/// A token positioned in absolute line / UTF-16 column coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineToken {
    pub line: u32,
    pub start: u32,
    pub length: u32,
    pub category: Category,
}

/// Legend advertised in the `initialize` response
pub fn legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: Category::ALL
            .iter()
            .map(|c| SemanticTokenType::new(c.as_str()))
            .collect(),
        token_modifiers: vec![],
    }
}

/// Legend index for `category`
pub fn token_type(category: Category) -> u32 {
    category.index() as u32
}

/// Classify `text` and position the painted runs
///
/// Only lines inside `range` (if given) are classified; an end at character
/// 0 excludes its line. Disabled categories
/// are dropped before flattening, so an enabled outer annotation shows
/// through where a disabled inner one would have won.
pub fn document_tokens(
    text: &str,
    settings: &HighlightSettings,
    range: Option<Range>,
) -> Vec<LineToken> {
    let mut tokens = Vec::new();
    for line in lines(text, 0) {
        let number = line.number as u32;
        if range.is_some_and(|range| !covers_line(&range, number)) {
            continue;
        }
        if line.is_blank() || !settings.accepts_line(line.text.len()) {
            continue;
        }

        let annotations: Vec<_> = line
            .classify()
            .into_iter()
            .filter(|a| settings.is_enabled(a.category))
            .collect();

        for run in flatten(&annotations) {
            let start = run.start - line.offset;
            let end = run.end - line.offset;
            let (Some(before), Some(covered)) = (line.text.get(..start), line.text.get(start..end))
            else {
                continue;
            };
            tokens.push(LineToken {
                line: number,
                start: utf16_len(before),
                length: utf16_len(covered),
                category: run.category,
            });
        }
    }
    tokens
}

/// Delta-encode tokens already sorted by position
pub fn encode(tokens: &[LineToken]) -> Vec<SemanticToken> {
    let mut encoded = Vec::with_capacity(tokens.len());
    let mut prev_line = 0u32;
    let mut prev_start = 0u32;

    for token in tokens {
        let delta_line = token.line - prev_line;
        let delta_start = if delta_line == 0 {
            token.start - prev_start
        } else {
            token.start
        };

        encoded.push(SemanticToken {
            delta_line,
            delta_start,
            length: token.length,
            token_type: token_type(token.category),
            token_modifiers_bitset: 0,
        });

        prev_line = token.line;
        prev_start = token.start;
    }

    encoded
}

/// Whether `line` intersects `range` (end position exclusive)
fn covers_line(range: &Range, line: u32) -> bool {
    let end = &range.end;
    line >= range.start.line && (line < end.line || (line == end.line && end.character > 0))
}

fn utf16_len(text: &str) -> u32 {
    text.encode_utf16().count() as u32
}
