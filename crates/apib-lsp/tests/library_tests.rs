//! Library integration tests for apib-lsp
//!
//! Drives the token pipeline the server uses, without a client.

use std::fs;

use apib_highlight::Category;
use apib_lsp::config::{HighlightSettings, Settings};
use apib_lsp::semantic::{document_tokens, encode, legend, token_type};
use tempfile::TempDir;

const COUPONS: &str = include_str!("../../apib-highlight/tests/fixtures/coupons.apib");

#[test]
fn test_fixture_tokens_are_disjoint() {
    let tokens = document_tokens(COUPONS, &HighlightSettings::default(), None);
    assert!(!tokens.is_empty());
    for pair in tokens.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            a.line < b.line || (a.line == b.line && a.start + a.length <= b.start),
            "{a:?} overlaps {b:?}"
        );
        assert!(a.length > 0);
    }
}

#[test]
fn test_encoded_stream_decodes_back() {
    let tokens = document_tokens(COUPONS, &HighlightSettings::default(), None);
    let encoded = encode(&tokens);
    assert_eq!(encoded.len(), tokens.len());

    let (mut line, mut start) = (0u32, 0u32);
    for (token, wire) in tokens.iter().zip(&encoded) {
        line += wire.delta_line;
        start = if wire.delta_line == 0 {
            start + wire.delta_start
        } else {
            wire.delta_start
        };
        assert_eq!((line, start), (token.line, token.start));
        assert_eq!(wire.token_type, token_type(token.category));
    }
}

#[test]
fn test_legend_names_are_category_identifiers() {
    let names: Vec<_> = legend()
        .token_types
        .iter()
        .map(|t| t.as_str().to_string())
        .collect();
    assert_eq!(names[0], "metadata");
    assert!(names.contains(&"mson-type-reference".to_string()));
    assert_eq!(names.len(), Category::ALL.len());
}

#[test]
fn test_settings_from_workspace_drive_filtering() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("apib.toml"),
        "[highlight]\ndisabled = [\"metadata\", \"status-code\"]\n",
    )
    .unwrap();

    let settings = Settings::discover(dir.path()).unwrap();
    let tokens = document_tokens(COUPONS, &settings.highlight, None);
    assert!(tokens
        .iter()
        .all(|t| t.category != Category::Metadata && t.category != Category::StatusCode));
    assert!(tokens.iter().any(|t| t.category == Category::HttpMethod));
}
