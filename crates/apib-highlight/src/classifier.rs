//! Line Classifier
//!
//! Applies the pattern catalog to one line in a fixed priority order and
//! returns the resulting annotations, translated to absolute offsets.
//!
//! Dispatch order:
//! 1. Metadata (`FORMAT:` / `HOST:`) covers the whole line and stops.
//! 2. Group headers annotate the group name and stop.
//! 3. Resource headers annotate their bracketed path.
//! 4. Attributes sections: typed, then bare, then the generic section
//!    keywords. A typed Attributes line is never an attribute definition.
//! 5. Request and 6. Response lines.
//! 7. HTTP methods, bracketed actions, URI variables and MIME types.
//! 8. Type annotations, number literals and MSON flags.
//! 9. API title, Data Structures, attribute definitions, action headers,
//!    relations, default values and string literals.
//!
//! Steps 7 to 9 always run once the early exits are passed. Nothing is
//! deduplicated; overlapping annotations are expected.

use crate::annotation::{Annotation, Span};
use crate::category::Category;
use crate::patterns;

/// Classify one line of a document
///
/// `offset` is the byte offset of the line's first character in the full
/// document. Blank lines yield nothing. Never panics on arbitrary input.
///
/// # Example
///
/// ```
/// use apib_highlight::{classify_line, Category};
///
/// let annotations = classify_line("+ Response 200 (application/json)", 0);
/// let categories: Vec<_> = annotations.iter().map(|a| a.category).collect();
/// assert!(categories.contains(&Category::StatusCode));
/// assert!(categories.contains(&Category::MimeType));
/// ```
pub fn classify_line(line: &str, offset: usize) -> Vec<Annotation> {
    if line.trim().is_empty() {
        return Vec::new();
    }

    let mut sink = LineSink::new(line, offset);

    if patterns::is_format_metadata(line) || patterns::match_host(line).is_some() {
        sink.emit(Span::new(0, line.len()), Category::Metadata);
        return sink.finish();
    }

    if let Some(name) = patterns::match_group(line) {
        sink.emit(name, Category::GroupHeader);
        return sink.finish();
    }

    if let Some(resource) = patterns::match_resource(line) {
        sink.emit(resource.bracket, Category::ResourcePath);
    }

    let typed_attributes = classify_sections(line, &mut sink);
    classify_request_response(line, &mut sink);
    classify_http_and_uri(line, &mut sink);
    classify_mson_elements(line, &mut sink);
    classify_advanced_elements(line, &mut sink, typed_attributes);

    sink.finish()
}

/// Collects annotations for one line
struct LineSink<'a> {
    line: &'a str,
    offset: usize,
    out: Vec<Annotation>,
}

impl<'a> LineSink<'a> {
    fn new(line: &'a str, offset: usize) -> Self {
        Self {
            line,
            offset,
            out: Vec::new(),
        }
    }

    fn emit(&mut self, span: Span, category: Category) {
        debug_assert!(
            span.start <= span.end && span.end <= self.line.len(),
            "span {span:?} outside line of length {}",
            self.line.len()
        );
        if span.is_empty() {
            return;
        }
        self.out.push(span.to_annotation(self.offset, category));
    }

    fn finish(self) -> Vec<Annotation> {
        self.out
    }
}

/// Step 4. Returns true when the line is a typed Attributes section.
fn classify_sections(line: &str, sink: &mut LineSink<'_>) -> bool {
    if let Some(section) = patterns::match_attributes_with_type(line) {
        sink.emit(section.keyword, Category::SectionKeyword);
        sink.emit(section.type_expression, Category::MsonTypeReference);
        return true;
    }

    if let Some(keyword) = patterns::match_attributes_bare(line) {
        sink.emit(keyword, Category::SectionKeyword);
    } else if let Some(keyword) = patterns::match_section_keyword(line) {
        sink.emit(keyword, Category::SectionKeyword);
    }
    false
}

/// Steps 5 and 6
fn classify_request_response(line: &str, sink: &mut LineSink<'_>) {
    if let Some(request) = patterns::match_request(line) {
        sink.emit(request.keyword, Category::SectionKeyword);
        if let Some(mime) = request.mime {
            sink.emit(mime, Category::MimeType);
        }
    }

    if let Some(response) = patterns::match_response(line) {
        sink.emit(response.keyword, Category::SectionKeyword);
        sink.emit(response.status, Category::StatusCode);
        if let Some(mime) = response.mime {
            sink.emit(mime, Category::MimeType);
        }
    }
}

/// Step 7
fn classify_http_and_uri(line: &str, sink: &mut LineSink<'_>) {
    for method in patterns::find_http_methods(line) {
        sink.emit(method, Category::HttpMethod);
    }

    for action in patterns::find_bracketed_actions(line) {
        sink.emit(action.whole, Category::ResourcePath);
        sink.emit(action.method, Category::HttpMethod);
    }

    for variable in patterns::find_path_variables(line) {
        sink.emit(variable, Category::UriVariable);
    }
    for query in patterns::find_query_variables(line) {
        sink.emit(query, Category::UriVariable);
    }

    for content in patterns::find_parentheticals(line) {
        if patterns::is_mime_type(content.as_str(line)) {
            sink.emit(content, Category::MimeType);
        }
    }
}

/// Step 8
fn classify_mson_elements(line: &str, sink: &mut LineSink<'_>) {
    for annotation in patterns::find_type_annotations(line) {
        sink.emit(annotation, Category::TypeAnnotation);
    }

    for number in patterns::find_numbers(line) {
        if !inside_typed_parenthetical(line, number) {
            sink.emit(number, Category::NumberLiteral);
        }
    }

    for flag in patterns::find_flags(line) {
        sink.emit(flag, Category::FlagKeyword);
    }
}

/// Whether a number sits inside a parenthetical that reads as a type
/// annotation or a media type
///
/// The nearest `(` before the number counts as open unless a `)` follows
/// it; there is no depth tracking, so a line with several groups ahead of
/// the number is judged by the last one only.
fn inside_typed_parenthetical(line: &str, number: Span) -> bool {
    let before = &line.as_bytes()[..number.start];
    let open = match before.iter().rposition(|&b| b == b'(' || b == b')') {
        Some(i) if before[i] == b'(' => i,
        _ => return false,
    };
    let close = match line[number.end..].find(')') {
        Some(i) => number.end + i,
        None => return false,
    };

    let content = &line[open + 1..close];
    content.contains('/') || patterns::mentions_type_word(content)
}

/// Step 9
fn classify_advanced_elements(line: &str, sink: &mut LineSink<'_>, typed_attributes: bool) {
    if let Some(title) = patterns::match_api_title(line) {
        if !line.contains("Group") && !line.contains("Data Structures") {
            sink.emit(title, Category::ApiName);
        }
    }

    if patterns::is_data_structures_header(line) {
        sink.emit(Span::new(0, line.len()), Category::DataStructuresHeader);
    }

    if !typed_attributes {
        if let Some(def) = patterns::match_attribute(line) {
            classify_definition(line, &def, sink);
        }
    }

    if let Some(action) = patterns::match_action_header(line) {
        sink.emit(action.name, Category::ActionName);
        sink.emit(action.method, Category::HttpMethod);
    }

    if let Some(relation) = patterns::match_relation(line) {
        sink.emit(relation, Category::Relation);
    }

    if let Some(value) = patterns::match_default_value(line) {
        sink.emit(value, Category::StringValue);
    }

    for literal in patterns::find_string_literals(line) {
        sink.emit(literal, Category::StringValue);
    }
}

fn classify_definition(line: &str, def: &patterns::Definition, sink: &mut LineSink<'_>) {
    sink.emit(def.name, Category::ParameterName);

    if let Some(value) = def.value {
        let category = if is_numeral(value.as_str(line)) {
            Category::NumberLiteral
        } else {
            Category::StringValue
        };
        sink.emit(value, category);
    }

    if let Some(blob) = def.type_blob {
        classify_type_components(line, blob, sink);
    }
}

/// Split a `(type, flags)` blob on commas and classify each component
fn classify_type_components(line: &str, blob: Span, sink: &mut LineSink<'_>) {
    let mut start = blob.start;
    for piece in blob.as_str(line).split(',') {
        let component = Span::new(start, start + piece.len()).trimmed(line);
        start += piece.len() + 1;

        let word = component.as_str(line);
        let category = if patterns::is_type_word(word) {
            Category::TypeAnnotation
        } else if patterns::is_flag_word(word) {
            Category::FlagKeyword
        } else if patterns::is_type_reference(word) {
            Category::MsonTypeReference
        } else {
            continue;
        };
        sink.emit(component, category);
    }
}

/// `25`, `1.5`; not `250FF`, `1.`, `.5`
fn is_numeral(text: &str) -> bool {
    let (whole, fraction) = match text.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (text, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(whole) && fraction.map_or(true, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(line: &str) -> Vec<(&str, Category)> {
        classify_line(line, 0)
            .into_iter()
            .map(|a| (&line[a.range()], a.category))
            .collect()
    }

    #[test]
    fn test_blank_lines_yield_nothing() {
        assert!(classify_line("", 0).is_empty());
        assert!(classify_line("   \t ", 10).is_empty());
    }

    #[test]
    fn test_format_metadata_whole_line() {
        let annotations = classify_line("FORMAT: 1A", 5);
        assert_eq!(annotations, vec![Annotation::new(5, 15, Category::Metadata)]);
        assert!(classify_line("FORMAT: 2B", 0)
            .iter()
            .all(|a| a.category != Category::Metadata));
    }

    #[test]
    fn test_group_stops_classification() {
        assert_eq!(
            spans("# Group Coupons GET"),
            vec![("Coupons GET", Category::GroupHeader)]
        );
    }

    #[test]
    fn test_numeral_detection() {
        assert!(is_numeral("25"));
        assert!(is_numeral("1.5"));
        assert!(!is_numeral("250FF"));
        assert!(!is_numeral("1."));
        assert!(!is_numeral(".5"));
        assert!(!is_numeral(""));
    }

    #[test]
    fn test_number_inside_type_annotation_suppressed() {
        let line = "    + tags (array[string], max 5)";
        assert!(!spans(line).contains(&("5", Category::NumberLiteral)));

        let line = "+ Request (application/json; version=2)";
        assert!(spans(line)
            .iter()
            .all(|(_, c)| *c != Category::NumberLiteral));
    }

    #[test]
    fn test_number_inside_plain_parenthetical_kept() {
        let line = "Limit is 10 (max 100)";
        let result = spans(line);
        assert!(result.contains(&("10", Category::NumberLiteral)));
        assert!(result.contains(&("100", Category::NumberLiteral)));
    }

    #[test]
    fn test_number_after_closed_parenthetical_kept() {
        let line = "    + count (number) 42";
        assert!(spans(line).contains(&("42", Category::NumberLiteral)));
    }

    #[test]
    fn test_number_with_unclosed_parenthesis_kept() {
        let line = "value (string 7";
        assert!(spans(line).contains(&("7", Category::NumberLiteral)));
    }

    #[test]
    fn test_type_components_offsets() {
        let line = "+ coupon:  abc   (Coupon ,  required , array[x])";
        let result = spans(line);
        assert!(result.contains(&("Coupon", Category::MsonTypeReference)));
        assert!(result.contains(&("required", Category::FlagKeyword)));
        assert!(!result.iter().any(|(t, _)| *t == "array[x]"));
    }

    #[test]
    fn test_partial_constructs_do_not_panic() {
        for line in [
            "(", "[", "`", "\"", "{", "{?", "+", "+ ", "#", "## [", "### x [",
            "+ Attributes (", "+ Response 20", "+ name: (", "é(ü) 5 ö",
        ] {
            let _ = classify_line(line, 0);
        }
    }
}
