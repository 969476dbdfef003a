//! The pattern catalog
//!
//! One entry per recognizer, in the order the classifier consults them.
//! Every regex is single-line; keyword patterns carry an inline `(?i)` flag.

use super::{CaptureRole, Pattern, PatternKind};

use CaptureRole::*;

pub(super) static PATTERNS: [Pattern; PatternKind::COUNT] = [
    Pattern {
        kind: PatternKind::FormatMetadata,
        name: "format-metadata",
        description: "Blueprint format declaration `FORMAT: 1A`",
        source: r"(?i)^FORMAT:\s*1A\s*$",
        roles: &[],
        accepts: &["FORMAT: 1A", "format:1A  "],
        rejects: &["FORMAT: 2B", "FORMAT: 1A extra"],
    },
    Pattern {
        kind: PatternKind::HostMetadata,
        name: "host-metadata",
        description: "API host declaration `HOST: <url>`",
        source: r"(?i)^HOST:\s*(https?://\S+)\s*$",
        roles: &[(1, Url)],
        accepts: &["HOST: https://api.example.com", "host: http://localhost:8080/v1"],
        rejects: &["HOST: api.example.com", "HOST:"],
    },
    Pattern {
        kind: PatternKind::GroupHeader,
        name: "group-header",
        description: "Resource group `# Group <name>` or `# <name> Group`",
        source: r"(?i)^#+\s*(?:(Group)\s+(.+)|(.*?)\s+(Group))\s*$",
        roles: &[(1, Keyword), (2, Name), (3, Name), (4, Keyword)],
        accepts: &["# Group Coupons", "## Users Group"],
        rejects: &["# Coupon API", "# Grouping rules"],
    },
    Pattern {
        kind: PatternKind::ResourceHeader,
        name: "resource-header",
        description: "Resource section `## <name> [<path>]`",
        source: r"^\s*##\s+(.+?)\s+(\[(/[^\]]+)\])\s*$",
        roles: &[(1, Name), (2, Bracket), (3, Path)],
        accepts: &["## Coupon [/coupons/{id}]", "  ## Users [/users{?page}]  "],
        rejects: &["## Coupon", "### Retrieve [GET /coupons]"],
    },
    Pattern {
        kind: PatternKind::ActionHeader,
        name: "action-name-header",
        description: "Action section `### <name> [<METHOD> <path>?]`",
        source: r"^\s*###\s+(.+?)\s*\[([A-Z]+)\s*([^\]]+)?\]\s*$",
        roles: &[(1, Name), (2, Method), (3, Path)],
        accepts: &["### Retrieve a Coupon [GET]", "### Create [POST /coupons]"],
        rejects: &["## Coupon [/coupons]", "### Retrieve a Coupon"],
    },
    Pattern {
        kind: PatternKind::HttpMethod,
        name: "http-method",
        description: "Standalone HTTP method word",
        source: r"(?i)\b(GET|POST|PUT|PATCH|DELETE|HEAD|OPTIONS|TRACE|CONNECT)\b",
        roles: &[(1, Method)],
        accepts: &["GET", "send a POST request"],
        rejects: &["GETTER", "forget the headers"],
    },
    Pattern {
        kind: PatternKind::BracketedAction,
        name: "bracketed-action",
        description: "Action block `[<METHOD> <path>]` anywhere in a line",
        source: r"(?i)\[(GET|POST|PUT|PATCH|DELETE|HEAD|OPTIONS|TRACE|CONNECT)\s+([^\]]+)\]",
        roles: &[(1, Method), (2, Path)],
        accepts: &["## Coupons [GET /coupons]", "[delete /coupons/{id}]"],
        rejects: &["[/coupons]", "[GET]"],
    },
    Pattern {
        kind: PatternKind::UriPathVariable,
        name: "uri-path-variable",
        description: "URI template variable `{name}`",
        source: r"\{([A-Za-z_][A-Za-z0-9_]*)\}",
        roles: &[(1, Variable)],
        accepts: &["/coupons/{id}", "/{user_id}/posts"],
        rejects: &["/users{?page}", "/coupons/{1st}"],
    },
    Pattern {
        kind: PatternKind::UriQueryVariable,
        name: "uri-query-variable",
        description: "URI template query expansion `{?a,b,c}`",
        source: r"\{\?([A-Za-z0-9_,]+)\}",
        roles: &[(1, Variable)],
        accepts: &["/users{?page,size}", "/search{?q}"],
        rejects: &["/coupons/{id}", "/users{?}"],
    },
    Pattern {
        kind: PatternKind::SectionKeyword,
        name: "section-keyword",
        description: "Generic section `+ Parameters|Headers|Body|Schema`",
        source: r"(?i)^\s*\+\s+(Parameters|Headers|Body|Schema)\b.*$",
        roles: &[(1, Keyword)],
        accepts: &["+ Parameters", "        + Body", "+ headers"],
        rejects: &["+ Attributes", "+ Bodyguard: 1"],
    },
    Pattern {
        kind: PatternKind::AttributesWithType,
        name: "attributes-with-type",
        description: "Attributes section with a type `+ Attributes (<type>)`",
        source: r"(?i)^\s*\+\s+(Attributes)\s*\((.+)\)\s*$",
        roles: &[(1, Keyword), (2, TypeExpression)],
        accepts: &[
            "+ Attributes (Coupon)",
            "    + Attributes (array[Product])",
            "+ Attributes (Coupon (Base))",
        ],
        rejects: &["+ Attributes", "+ Attributes ()", "+ Attributes (A) (B"],
    },
    Pattern {
        kind: PatternKind::AttributesBare,
        name: "attributes-bare",
        description: "Attributes section with nothing following",
        source: r"(?i)^\s*\+\s+(Attributes)\s*$",
        roles: &[(1, Keyword)],
        accepts: &["+ Attributes", "  + attributes  "],
        rejects: &["+ Attributes (Coupon)", "+ Attributes of the user"],
    },
    Pattern {
        kind: PatternKind::RequestLine,
        name: "request-line",
        description: "Request section `+ Request [(<mime>)]`",
        source: r"(?i)^\s*\+\s+(Request)\b\s*(.*?)\s*(\(([^)]+)\))?\s*$",
        roles: &[(1, Keyword), (2, Name), (4, MimeType)],
        accepts: &["+ Request (application/json)", "+ Request Create Coupon", "+ Request"],
        rejects: &["+ Response 200", "+ Requests"],
    },
    Pattern {
        kind: PatternKind::ResponseLine,
        name: "response-line",
        description: "Response section `+ Response <code> [(<mime>)]`",
        source: r"(?i)^\s*\+\s+(Response)\s+([0-9]{3})\s*(\(([^)]+)\))?\s*$",
        roles: &[(1, Keyword), (2, StatusCode), (4, MimeType)],
        accepts: &["+ Response 200 (application/json)", "+ Response 404"],
        rejects: &["+ Response", "+ Response 2000"],
    },
    Pattern {
        kind: PatternKind::ParentheticalContent,
        name: "parenthetical-content",
        description: "Any `(<content>)` span",
        source: r"\(([^)]+)\)",
        roles: &[(1, Content)],
        accepts: &["(application/json)", "+ id (number)"],
        rejects: &["()", "no parentheses here"],
    },
    Pattern {
        kind: PatternKind::TypeAnnotation,
        name: "type-annotation",
        description: "Base-type annotation `(number|object|string|boolean|array|enum ...)`",
        source: r"(?i)\((number|object|string|boolean|array|enum)\b[^)]*\)",
        roles: &[(0, TypeExpression), (1, TypeExpression)],
        accepts: &["(number)", "(array[string], optional)", "(String)"],
        rejects: &["(Coupon)", "(numbers)"],
    },
    Pattern {
        kind: PatternKind::NumberLiteral,
        name: "number-literal",
        description: "Integer or decimal numeral on word boundaries",
        source: r"\b[0-9]+(?:\.[0-9]+)?\b",
        roles: &[(0, Number)],
        accepts: &["25", "costs 1.5 units"],
        rejects: &["250FF", "no digits"],
    },
    Pattern {
        kind: PatternKind::MsonFlag,
        name: "mson-flag-keyword",
        description: "MSON type attribute `required|optional|nullable|default|sample`",
        source: r"(?i)\b(required|optional|nullable|default|sample)\b",
        roles: &[(1, Flag)],
        accepts: &["(string, required)", "(number, Optional)"],
        rejects: &["requirements", "samples"],
    },
    Pattern {
        kind: PatternKind::ApiTitle,
        name: "api-title-header",
        description: "Top-level header `# <title>`",
        source: r"^#\s+(.+)$",
        roles: &[(1, Title)],
        accepts: &["# Coupon API", "#  Polls"],
        rejects: &["## Coupon", "#hashtag"],
    },
    Pattern {
        kind: PatternKind::DataStructuresHeader,
        name: "data-structures-header",
        description: "Data structures section `# Data Structures`",
        source: r"(?i)^#+\s*Data\s+Structures\s*$",
        roles: &[],
        accepts: &["# Data Structures", "## data   structures "],
        rejects: &["# Data Structures Guide", "Data Structures"],
    },
    Pattern {
        kind: PatternKind::MsonAttribute,
        name: "mson-attribute-definition",
        description: "MSON attribute `+ <name>[: <value>] [(<type>)] [- <description>]`, excluding section keywords",
        source: r"(?i)^\s*\+\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?::\s*([^(\-]+?)\s*)?(?:\(([^)]+)\))?\s*(?:-\s*(.*))?$",
        roles: &[(1, Name), (2, Value), (3, TypeExpression), (4, Description)],
        accepts: &[
            "    + id: 250FF (string, required)",
            "    + percent_off: 25 (number)",
            "    + tags (array[string], optional) - Available tags",
            "+ user_id: 123 (number)",
        ],
        rejects: &[
            "+ Attributes (Coupon)",
            "+ ATTRIBUTES (User)",
            "+ Parameters",
            "+ Response 200 (application/json)",
            "+ Default: `10`",
            "+ Relation: self",
        ],
    },
    Pattern {
        kind: PatternKind::ParameterDefinition,
        name: "parameter-definition",
        description: "Parameter `+ <name>[: <value>] [(<type>)] [- <description>]`",
        source: r"^\s*\+\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?::\s*([^(\-]+?)\s*)?(?:\(([^)]+)\))?\s*(?:-\s*(.*))?$",
        roles: &[(1, Name), (2, Value), (3, TypeExpression), (4, Description)],
        accepts: &["    + limit (number, optional)", "+ id: 1 (number) - Coupon id"],
        rejects: &["+ id: (broken", "plain text"],
    },
    Pattern {
        kind: PatternKind::DefaultValue,
        name: "default-value",
        description: "Default value `+ Default: `<value>``",
        source: r"(?i)^\s*\+\s*Default\s*:\s*`([^`]+)`\s*$",
        roles: &[(1, Value)],
        accepts: &["+ Default: `10`", "    + default:`asc`"],
        rejects: &["+ Default: 10", "+ Default: ``"],
    },
    Pattern {
        kind: PatternKind::Relation,
        name: "relation",
        description: "Link relation `+ Relation: <value>`",
        source: r"(?i)^\s*\+\s*Relation\s*:\s*(.+)\s*$",
        roles: &[(1, Value)],
        accepts: &["+ Relation: self", "  + relation:create"],
        rejects: &["+ Relation", "+ Relations: x"],
    },
    Pattern {
        kind: PatternKind::StringLiteral,
        name: "string-literal",
        description: "Double-quoted or backtick-quoted span",
        source: r#""([^"]*)"|`([^`]*)`"#,
        roles: &[(1, Content), (2, Content)],
        accepts: &[r#"+ name: "john" (string)"#, "use `limit`"],
        rejects: &["no quotes", "\"unterminated"],
    },
];
