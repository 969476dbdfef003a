//! apib-wasm - WebAssembly bindings for apib-highlight
//!
//! Exposes the classifier to browser editors (CodeMirror, Monaco, ...).
//! Annotations cross the boundary as plain objects
//! `{ start, end, category }` with UTF-8 byte offsets.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use apib_highlight::{Annotation, Category, Pattern};

/// Returns the current version of apib-highlight
#[wasm_bindgen]
pub fn version() -> String {
    apib_highlight::VERSION.to_string()
}

/// Classify one line whose first byte sits at `offset`
#[wasm_bindgen(js_name = classifyLine)]
pub fn classify_line(line: &str, offset: usize) -> Result<JsValue, JsValue> {
    to_js(&apib_highlight::classify_line(line, offset))
}

/// Classify every line of a document
#[wasm_bindgen(js_name = classifyText)]
pub fn classify_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&apib_highlight::classify_text(text, 0))
}

/// Classify a document and resolve overlaps (innermost wins)
#[wasm_bindgen(js_name = paintRuns)]
pub fn paint_runs(text: &str) -> Result<JsValue, JsValue> {
    to_js(&document_runs(text))
}

/// The pattern catalog in priority order
#[wasm_bindgen(js_name = listPatterns)]
pub fn list_patterns() -> Result<JsValue, JsValue> {
    let patterns: &[Pattern] = apib_highlight::list_patterns();
    to_js(patterns)
}

/// Category identifiers, indexed like the LSP legend
#[wasm_bindgen]
pub fn categories() -> Vec<String> {
    Category::ALL.iter().map(|c| c.as_str().to_string()).collect()
}

fn document_runs(text: &str) -> Vec<Annotation> {
    apib_highlight::lines(text, 0)
        .filter(|line| !line.is_blank())
        .flat_map(|line| apib_highlight::flatten(&line.classify()))
        .collect()
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}
