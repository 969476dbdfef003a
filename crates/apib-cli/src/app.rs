//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::style::{Attribute, Color, ContentStyle};
use serde::Serialize;
use tracing::{debug, Level};

use apib_highlight::{
    flatten, lines, list_patterns, verify_patterns, Annotation, Category, LineContext,
};
use apib_lsp::config::{Settings, StyleSpec, Theme};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "apib")]
#[command(author, version, about = "API Blueprint token classifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every annotation in a blueprint
    Classify {
        /// Input API Blueprint file
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print a blueprint with terminal colors
    Highlight {
        /// Input API Blueprint file
        input: PathBuf,

        /// Configuration file (default: nearest apib.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the pattern catalog
    Patterns {
        /// Run every pattern against its sample lines
        #[arg(long)]
        check: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Classify a single line
    Line {
        /// Line text
        text: String,

        /// Absolute offset of the line's first byte
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// One reported annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry<'a> {
    /// 1-based line number
    pub line: usize,
    /// 1-based character column
    pub column: usize,
    pub start: usize,
    pub end: usize,
    pub category: Category,
    pub text: &'a str,
}

/// Run the CLI application
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    apib_lsp::init_tracing(Level::WARN);

    match cli.command {
        Commands::Classify { input, format } => classify_command(&input, format)?,
        Commands::Highlight { input, config } => highlight_command(&input, config.as_deref())?,
        Commands::Patterns { check, format } => patterns_command(check, format)?,
        Commands::Line {
            text,
            offset,
            format,
        } => line_command(&text, offset, format)?,
    }

    Ok(())
}

/// `apib classify`
pub fn classify_command(input: &Path, format: OutputFormat) -> Result<()> {
    let text = read_input(input)?;
    let entries = document_entries(&text);
    debug!("{} annotations in {}", entries.len(), input.display());
    emit(&render_entries(&entries, format)?)
}

/// `apib highlight`
pub fn highlight_command(input: &Path, config: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    let settings = load_settings(config, input)?;
    emit(&highlight_document(&text, &settings))
}

/// `apib patterns`
pub fn patterns_command(check: bool, format: OutputFormat) -> Result<()> {
    if check {
        verify_patterns().context("Pattern self-check failed")?;
        let checked: usize = list_patterns()
            .iter()
            .map(|p| p.accepts.len() + p.rejects.len())
            .sum();
        emit(&format!(
            "All {} patterns passed ({} samples)",
            list_patterns().len(),
            checked
        ))
    } else {
        emit(&render_patterns(format)?)
    }
}

/// `apib line`
pub fn line_command(text: &str, offset: usize, format: OutputFormat) -> Result<()> {
    let line = LineContext {
        number: 0,
        offset,
        text,
    };
    emit(&render_entries(&line_entries(&line), format)?)
}

fn read_input(input: &Path) -> Result<String> {
    if !input.exists() {
        bail!("Input file not found: {}", input.display());
    }
    fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

fn emit(report: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{report}").context("Failed to write output")
}

/// Explicit config path, else the nearest `apib.toml` above the input
fn load_settings(config: Option<&Path>, input: &Path) -> Result<Settings> {
    match config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Settings::load(path).with_context(|| format!("Failed to load {}", path.display()))
        }
        None => {
            let dir = input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            Settings::discover(dir).context("Failed to load apib.toml")
        }
    }
}

/// Annotations of every line, in document order
pub fn document_entries(text: &str) -> Vec<Entry<'_>> {
    lines(text, 0)
        .filter(|line| !line.is_blank())
        .flat_map(|line| line_entries(&line))
        .collect()
}

/// Annotations of one line, positioned within it
pub fn line_entries<'a>(line: &LineContext<'a>) -> Vec<Entry<'a>> {
    line.classify()
        .into_iter()
        .filter_map(|annotation| {
            let start = annotation.start - line.offset;
            let end = annotation.end - line.offset;
            Some(Entry {
                line: line.number + 1,
                column: line.text.get(..start)?.chars().count() + 1,
                start: annotation.start,
                end: annotation.end,
                category: annotation.category,
                text: line.text.get(start..end)?,
            })
        })
        .collect()
}

pub fn render_entries(entries: &[Entry<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(entries).context("Failed to serialize annotations")
        }
        OutputFormat::Text => Ok(entries
            .iter()
            .map(|e| {
                format!(
                    "{}:{}\t{}..{}\t{}\t{:?}",
                    e.line, e.column, e.start, e.end, e.category, e.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_patterns(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(list_patterns()).context("Failed to serialize patterns")
        }
        OutputFormat::Text => Ok(list_patterns()
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let flag = if p.is_case_insensitive() { "i" } else { " " };
                format!("{:>2} {} {:<26} {}", i + 1, flag, p.name, p.description)
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Paint `text` with ANSI styles from the theme
///
/// Each byte takes the style of its innermost annotation. Disabled
/// categories and overlong lines (per `[highlight]`) stay unpainted.
/// Line terminators are copied from `text` unchanged.
pub fn highlight_document(text: &str, settings: &Settings) -> String {
    let highlight = &settings.highlight;
    let mut out = String::with_capacity(text.len() * 2);

    for line in lines(text, 0) {
        if line.is_blank() || !highlight.accepts_line(line.text.len()) {
            out.push_str(line.text);
        } else {
            let annotations: Vec<Annotation> = line
                .classify()
                .into_iter()
                .filter(|a| highlight.is_enabled(a.category))
                .collect();
            paint_line(&mut out, &line, &flatten(&annotations), &settings.theme);
        }
        out.push_str(terminator(text, &line));
    }

    out
}

/// Raw `\n`, `\r\n` or trailing `\r` that ended `line` in `text`
fn terminator<'a>(text: &'a str, line: &LineContext<'_>) -> &'a str {
    let rest = text.get(line.offset + line.text.len()..).unwrap_or_default();
    match rest.find('\n') {
        Some(newline) => &rest[..=newline],
        None => rest,
    }
}

fn paint_line(out: &mut String, line: &LineContext<'_>, runs: &[Annotation], theme: &Theme) {
    let mut cursor = 0;
    for run in runs {
        let start = run.start - line.offset;
        let end = run.end - line.offset;
        let (Some(gap), Some(covered)) = (line.text.get(cursor..start), line.text.get(start..end))
        else {
            continue;
        };
        out.push_str(gap);
        let styled = content_style(&theme.style(run.category)).apply(covered);
        out.push_str(&styled.to_string());
        cursor = end;
    }
    out.push_str(line.text.get(cursor..).unwrap_or_default());
}

/// Theme entry to crossterm style
pub fn content_style(spec: &StyleSpec) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = spec
        .rgb()
        .map(|(r, g, b)| Color::Rgb { r, g, b })
        .or_else(|| {
            spec.foreground
                .as_deref()
                .and_then(|name| Color::try_from(name).ok())
        });
    if spec.bold {
        style.attributes.set(Attribute::Bold);
    }
    if spec.italic {
        style.attributes.set(Attribute::Italic);
    }
    if spec.underline {
        style.attributes.set(Attribute::Underlined);
    }
    style
}
