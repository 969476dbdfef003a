//! Category styles
//!
//! The classifier is presentation-neutral; this is where categories meet
//! colors. Defaults follow a dark palette and can be overridden per
//! category under `[theme.styles]`.

use std::collections::BTreeMap;

use apib_highlight::Category;
use serde::{Deserialize, Serialize};

/// Visual style for one category
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StyleSpec {
    /// Color name (`"green"`, `"dark_grey"`) or `#RRGGBB`
    pub foreground: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyleSpec {
    fn colored(foreground: &str) -> Self {
        Self {
            foreground: Some(foreground.to_string()),
            ..Default::default()
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Foreground as RGB, when given in `#RRGGBB` form
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.foreground.as_deref()?.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Per-category style overrides on top of the default palette
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    pub styles: BTreeMap<Category, StyleSpec>,
}

impl Theme {
    /// Style for `category`: the override if present, else the default
    pub fn style(&self, category: Category) -> StyleSpec {
        self.styles
            .get(&category)
            .cloned()
            .unwrap_or_else(|| default_style(category))
    }
}

/// Built-in palette
pub fn default_style(category: Category) -> StyleSpec {
    match category {
        Category::Metadata => StyleSpec::colored("#BBB529").italic(),
        Category::GroupHeader => StyleSpec::colored("#CC7832").bold(),
        Category::ResourcePath => StyleSpec::colored("#6897BB").bold(),
        Category::HttpMethod => StyleSpec::colored("#6A8759").bold(),
        Category::UriVariable => StyleSpec::colored("#9876AA").italic(),
        Category::SectionKeyword => StyleSpec::colored("#CC7832").bold(),
        Category::MimeType => StyleSpec::colored("#629755"),
        Category::StatusCode => StyleSpec::colored("#6897BB").bold(),
        Category::Relation => StyleSpec::colored("#D0D0FF"),
        Category::TypeAnnotation => StyleSpec::colored("#6897BB"),
        Category::NumberLiteral => StyleSpec::colored("#6897BB"),
        Category::MsonTypeReference => StyleSpec::colored("#D0D0FF").bold(),
        Category::ParameterName | Category::MsonProperty => StyleSpec::colored("#9876AA"),
        Category::FlagKeyword => StyleSpec::colored("#CC7832").bold(),
        Category::StringValue => StyleSpec::colored("#6A8759"),
        Category::ApiName => StyleSpec::colored("#6897BB").bold(),
        Category::ActionName => StyleSpec::colored("#6A8759").bold(),
        Category::DataStructuresHeader => StyleSpec::colored("#9876AA").bold(),
    }
}
