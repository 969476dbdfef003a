//! Behavioral tests for the line classifier
//!
//! Each test pins one observable property of `classify_line` on a single
//! line of API Blueprint.

use apib_highlight::{classify_line, Annotation, Category};

/// Classify `line` at offset 0 and pair each annotation with its text
fn classify(line: &str) -> Vec<(&str, Category)> {
    classify_line(line, 0)
        .into_iter()
        .map(|a| (&line[a.range()], a.category))
        .collect()
}

fn count(found: &[(&str, Category)], category: Category) -> usize {
    found.iter().filter(|(_, c)| *c == category).count()
}

#[test]
fn test_format_metadata_any_case() {
    for line in ["FORMAT: 1A", "format: 1A", "Format:1A"] {
        let annotations = classify_line(line, 0);
        assert_eq!(
            annotations,
            vec![Annotation::new(0, line.len(), Category::Metadata)],
            "line: {line}"
        );
    }
}

#[test]
fn test_format_other_version_is_not_metadata() {
    assert!(classify_line("FORMAT: 2B", 0).is_empty());
}

#[test]
fn test_host_metadata_whole_line() {
    let line = "HOST: https://api.example.com/v1";
    assert_eq!(
        classify_line(line, 40),
        vec![Annotation::new(40, 40 + line.len(), Category::Metadata)]
    );
}

#[test]
fn test_attributes_with_type_is_section_not_attribute() {
    for type_expression in [
        "Coupon",
        "object",
        "array[Coupon]",
        "Coupon (Base)",
        "User, fixed",
    ] {
        for indent in ["", "    ", "\t"] {
            let line = format!("{indent}+ Attributes ({type_expression})");
            let found = classify(&line);

            assert_eq!(count(&found, Category::SectionKeyword), 1, "line: {line}");
            assert!(found.contains(&("Attributes", Category::SectionKeyword)));
            assert_eq!(count(&found, Category::MsonTypeReference), 1, "line: {line}");
            assert!(found.contains(&(type_expression, Category::MsonTypeReference)));
            assert_eq!(count(&found, Category::ParameterName), 0, "line: {line}");
        }
    }
}

#[test]
fn test_attributes_keyword_case_insensitive() {
    let found = classify("+ attributes (User)");
    assert!(found.contains(&("attributes", Category::SectionKeyword)));
    assert!(found.contains(&("User", Category::MsonTypeReference)));
    assert_eq!(count(&found, Category::ParameterName), 0);
}

#[test]
fn test_bare_attributes_section() {
    let found = classify("+ Attributes");
    assert_eq!(found, vec![("Attributes", Category::SectionKeyword)]);
}

#[test]
fn test_mson_attribute_with_string_value() {
    let found = classify("    + id: 250FF (string, required)");
    assert!(found.contains(&("id", Category::ParameterName)));
    assert!(found.contains(&("250FF", Category::StringValue)));
    assert!(found.contains(&("string", Category::TypeAnnotation)));
    assert!(found.contains(&("required", Category::FlagKeyword)));
    assert!(!found.contains(&("250FF", Category::NumberLiteral)));
}

#[test]
fn test_underscore_attribute_name() {
    let found = classify("    + percent_off: 25 (number)");
    assert!(found.contains(&("percent_off", Category::ParameterName)));
    assert!(found.contains(&("number", Category::TypeAnnotation)));
    assert!(found.contains(&("25", Category::NumberLiteral)));
}

#[test]
fn test_underscore_names_variants() {
    for (line, name) in [
        ("+ user_name: \"john_doe\" (string, optional)", "user_name"),
        ("+ _private (boolean)", "_private"),
        ("        + redeem_by (number) - Date after", "redeem_by"),
        ("\t\t+ is_active: true (boolean) - Status flag", "is_active"),
    ] {
        let found = classify(line);
        assert!(
            found.contains(&(name, Category::ParameterName)),
            "missing {name} in {found:?}"
        );
    }
}

#[test]
fn test_attribute_description_not_annotated() {
    let line = "+ created: 1415203908 (number) - Time stamp";
    let found = classify(line);
    assert!(found.contains(&("created", Category::ParameterName)));
    assert!(found.contains(&("1415203908", Category::NumberLiteral)));
    assert!(!found.iter().any(|(text, _)| text.contains("Time")));
}

#[test]
fn test_idempotent() {
    let line = "### Create a Coupon [POST /coupons{?limit}] (application/json) 42";
    let mut first = classify_line(line, 7);
    let mut second = classify_line(line, 7);
    first.sort_by_key(|a| (a.start, a.end, a.category));
    second.sort_by_key(|a| (a.start, a.end, a.category));
    assert_eq!(first, second);
}

#[test]
fn test_reserved_keywords_never_parameter_names() {
    for line in [
        "+ Parameters",
        "+ Headers",
        "+ Body",
        "+ Schema",
        "+ Attributes",
        "+ Request",
        "+ Request (application/json)",
        "+ Response 200",
        "+ Default: `10`",
        "+ Relation: self",
        "+ PARAMETERS",
        "    + body",
    ] {
        let found = classify(line);
        assert_eq!(
            count(&found, Category::ParameterName),
            0,
            "line: {line} gave {found:?}"
        );
    }
}

#[test]
fn test_generic_section_keywords() {
    for (line, keyword) in [
        ("+ Parameters", "Parameters"),
        ("    + Headers", "Headers"),
        ("+ body", "body"),
        ("+ Schema", "Schema"),
    ] {
        let found = classify(line);
        assert!(found.contains(&(keyword, Category::SectionKeyword)), "line: {line}");
    }
}

#[test]
fn test_uri_path_variable() {
    let found = classify("/coupons/{id}");
    assert_eq!(found, vec![("id", Category::UriVariable)]);
}

#[test]
fn test_uri_query_variable() {
    let found = classify("/users{?page,size}");
    assert_eq!(found, vec![("page,size", Category::UriVariable)]);
}

#[test]
fn test_response_line() {
    let found = classify("+ Response 200 (application/json)");
    assert!(found.contains(&("Response", Category::SectionKeyword)));
    assert!(found.contains(&("200", Category::StatusCode)));
    assert!(found.contains(&("application/json", Category::MimeType)));
    assert!(!found.contains(&("200", Category::ParameterName)));
}

#[test]
fn test_request_line() {
    let found = classify("+ Request (text/plain)");
    assert!(found.contains(&("Request", Category::SectionKeyword)));
    assert!(found.contains(&("text/plain", Category::MimeType)));

    let found = classify("+ Request");
    assert_eq!(found, vec![("Request", Category::SectionKeyword)]);
}

#[test]
fn test_group_header_name_only() {
    assert_eq!(
        classify("# Group Coupons"),
        vec![("Coupons", Category::GroupHeader)]
    );
    assert_eq!(
        classify("## Users Group"),
        vec![("Users", Category::GroupHeader)]
    );
}

#[test]
fn test_resource_header_path() {
    let found = classify("## Coupon [/coupons/{id}]");
    assert!(found.contains(&("[/coupons/{id}]", Category::ResourcePath)));
    assert!(found.contains(&("id", Category::UriVariable)));
    assert!(!found.iter().any(|(t, _)| *t == "## Coupon [/coupons/{id}]"));
}

#[test]
fn test_action_header() {
    let found = classify("### Retrieve a Coupon [GET]");
    assert!(found.contains(&("Retrieve a Coupon", Category::ActionName)));
    assert!(found.contains(&("GET", Category::HttpMethod)));
}

#[test]
fn test_bracketed_action_in_resource() {
    let found = classify("## Coupons [GET /coupons]");
    assert!(found.contains(&("[GET /coupons]", Category::ResourcePath)));
    assert_eq!(
        found
            .iter()
            .filter(|f| **f == ("GET", Category::HttpMethod))
            .count(),
        2
    );
}

#[test]
fn test_api_title_heuristic() {
    assert_eq!(
        classify("# Coupon API"),
        vec![("Coupon API", Category::ApiName)]
    );
    let found = classify("# Data Structures");
    assert_eq!(
        found,
        vec![("# Data Structures", Category::DataStructuresHeader)]
    );
    assert!(classify("## Coupon").is_empty());
}

#[test]
fn test_relation_and_default() {
    let found = classify("    + Relation: create");
    assert_eq!(found, vec![("create", Category::Relation)]);

    let found = classify("+ Default: `asc`");
    assert!(found.contains(&("asc", Category::StringValue)));
}

#[test]
fn test_string_literals() {
    let found = classify(r#"Authorization: "Bearer token" and `x-key`"#);
    assert!(found.contains(&("Bearer token", Category::StringValue)));
    assert!(found.contains(&("x-key", Category::StringValue)));
}

#[test]
fn test_type_annotation_whole_parenthetical() {
    let found = classify("+ limit (number, optional)");
    assert!(found.contains(&("(number, optional)", Category::TypeAnnotation)));
    assert!(found.contains(&("number", Category::TypeAnnotation)));
    assert!(found.contains(&("optional", Category::FlagKeyword)));
    assert!(found.contains(&("limit", Category::ParameterName)));
}

#[test]
fn test_number_suppressed_inside_mime() {
    let found = classify("+ Response 200 (application/vnd.api+json; version=2)");
    assert!(!found.contains(&("2", Category::NumberLiteral)));
    assert!(found.contains(&("200", Category::NumberLiteral)));
}

#[test]
fn test_annotations_stay_inside_line() {
    let lines = [
        "    + id: 250FF (string, required)",
        "## Coupon [/coupons/{id}]",
        "+ Response 200 (application/json)",
        "# Group Coupons",
        "HOST: https://x.io",
        "+ name: \"é ü\" (string) - naïve",
        "(((",
        "+ Attributes (",
    ];
    for line in lines {
        for annotation in classify_line(line, 1000) {
            assert!(annotation.start >= 1000, "line: {line}");
            assert!(annotation.end <= 1000 + line.len(), "line: {line}");
            assert!(annotation.start < annotation.end, "line: {line}");
        }
    }
}
