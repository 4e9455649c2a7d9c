//! Command-line interface for the dagesh highlight engine.
//!
//! Exposes the engine over three subcommands: `normalize` shows how a line
//! is prepared for matching, `find` lists match positions for one query,
//! and `highlight` composes the full span layers a renderer would receive.
//! Text arguments may be omitted to read from stdin.

mod theme;

use std::{
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use dagesh_highlight::{Color, LineHighlights, StyledSpan, UserHighlight};
use dagesh_match::{MatchRange, find_matches};
use dagesh_text::{IndexEntry, NormalizedText, strip_marks};
use serde::Serialize;

use crate::theme::Theme;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "dagesh")]
#[command(about = "Diacritic-insensitive search highlighting for Hebrew text")]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported `dagesh` subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show the matching variant of a line and its offset index
    Normalize {
        /// Text to normalize (reads stdin when omitted)
        text: Option<String>,

        /// Print the stripped display variant instead of the matching variant
        #[arg(long)]
        display: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Find every match of a query in a line
    Find {
        /// Search query
        query: String,

        /// Text to search (reads stdin when omitted)
        text: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Compose highlight span layers for a line
    Highlight {
        /// Text to highlight (reads stdin when omitted)
        text: Option<String>,

        /// Search terms (can be specified multiple times)
        #[arg(short = 'q', long = "term", required = true)]
        terms: Vec<String>,

        /// Byte offset of the current match's start
        #[arg(long)]
        current: Option<usize>,

        /// Stored user highlight as START..END[@#rrggbb] (repeatable)
        #[arg(long = "user", value_parser = parse_user_span)]
        user: Vec<UserSpanArg>,

        /// Compose against the display variant with diacritics hidden
        #[arg(long)]
        hide_marks: bool,

        /// Theme file with highlight colors
        #[arg(long)]
        theme: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// A `--user` flag value: stored range plus optional color override.
#[derive(Debug, Clone)]
struct UserSpanArg {
    /// Stored range in original-text byte offsets.
    range: MatchRange,
    /// Explicit color, or `None` to use the theme's user color.
    color: Option<Color>,
}

/// Parses a `--user` flag value of the form `START..END[@#rrggbb]`.
fn parse_user_span(raw: &str) -> Result<UserSpanArg, String> {
    let (range_part, color_part) = match raw.split_once('@') {
        Some((range, color)) => (range, Some(color)),
        None => (raw, None),
    };

    let (start, end) = range_part
        .split_once("..")
        .ok_or_else(|| format!("expected START..END[@#rrggbb], got '{raw}'"))?;
    let start = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid start offset in '{raw}'"))?;
    let end = end
        .trim()
        .parse()
        .map_err(|_| format!("invalid end offset in '{raw}'"))?;

    let color = color_part
        .map(|c| c.trim().parse::<Color>().map_err(|e| e.to_string()))
        .transpose()?;

    Ok(UserSpanArg {
        range: MatchRange::new(start, end),
        color,
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize {
            text,
            display,
            json,
        } => cmd_normalize(text, display, json),
        Commands::Find { query, text, json } => cmd_find(&query, text, json),
        Commands::Highlight {
            text,
            terms,
            current,
            user,
            hide_marks,
            theme,
            json,
        } => cmd_highlight(text, &terms, current, &user, hide_marks, theme.as_deref(), json),
    }
}

/// Returns the text argument, or reads it from stdin.
fn read_text(text: Option<String>) -> Result<String, ExitCode> {
    if let Some(text) = text {
        return Ok(text);
    }

    let mut buffer = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buffer) {
        eprintln!("error: failed to read stdin: {e}");
        return Err(ExitCode::FAILURE);
    }
    // Shell pipes append a trailing newline; offsets should not include it.
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

/// Serializes a value as pretty JSON to stdout.
fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// JSON output for `dagesh normalize`.
#[derive(Serialize)]
struct NormalizeOutput<'a> {
    /// The filtered matching variant.
    filtered: &'a str,
    /// One index entry per filtered character.
    index: &'a [IndexEntry],
}

/// Implements the `dagesh normalize` command.
fn cmd_normalize(text: Option<String>, display: bool, json: bool) -> ExitCode {
    let text = match read_text(text) {
        Ok(text) => text,
        Err(code) => return code,
    };

    if display {
        println!("{}", strip_marks(&text));
        return ExitCode::SUCCESS;
    }

    let norm = NormalizedText::new(&text);
    if json {
        let output = NormalizeOutput {
            filtered: norm.filtered(),
            index: norm.index(),
        };
        return print_json(&output);
    }

    println!("{}", norm.filtered());
    ExitCode::SUCCESS
}

/// JSON output row for `dagesh find`.
#[derive(Serialize)]
struct FindOutput<'a> {
    /// Byte offset of the match start.
    start: usize,
    /// Byte offset one past the match end.
    end: usize,
    /// The matched slice of the original text.
    text: &'a str,
}

/// Implements the `dagesh find` command.
fn cmd_find(query: &str, text: Option<String>, json: bool) -> ExitCode {
    let text = match read_text(text) {
        Ok(text) => text,
        Err(code) => return code,
    };

    let matches = find_matches(&text, query);

    if json {
        let rows: Vec<FindOutput<'_>> = matches
            .iter()
            .map(|m| FindOutput {
                start: m.start,
                end: m.end,
                text: &text[m.start..m.end],
            })
            .collect();
        return print_json(&rows);
    }

    if matches.is_empty() {
        println!("no matches");
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Start", "End", "Match"]);
    for m in &matches {
        table.add_row(vec![
            Cell::new(m.start.to_string()),
            Cell::new(m.end.to_string()),
            Cell::new(&text[m.start..m.end]),
        ]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}

/// Implements the `dagesh highlight` command.
fn cmd_highlight(
    text: Option<String>,
    terms: &[String],
    current: Option<usize>,
    user: &[UserSpanArg],
    hide_marks: bool,
    theme_path: Option<&Path>,
    json: bool,
) -> ExitCode {
    let text = match read_text(text) {
        Ok(text) => text,
        Err(code) => return code,
    };

    let theme = match theme_path {
        Some(path) => match Theme::load(path) {
            Ok(theme) => theme,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Theme::default(),
    };

    let stored: Vec<UserHighlight> = user
        .iter()
        .map(|arg| UserHighlight {
            range: arg.range,
            color: arg.color.unwrap_or(theme.colors.user),
        })
        .collect();

    let highlights = LineHighlights::compose(
        &text,
        terms,
        current,
        &stored,
        !hide_marks,
        &theme.settings(),
    );

    if json {
        return print_json(&highlights);
    }

    let displayed = if hide_marks { strip_marks(&text) } else { text };
    println!("{displayed}");

    if highlights.is_empty() {
        println!("no highlights");
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Layer", "Start", "End", "Color"]);
    let names = ["user", "search", "current"];
    for (name, layer) in names.into_iter().zip(highlights.layers()) {
        for span in layer {
            table.add_row(span_row(name, span));
        }
    }
    println!("{table}");

    ExitCode::SUCCESS
}

/// Builds one table row for a styled span.
fn span_row(layer_name: &str, span: &StyledSpan) -> Vec<Cell> {
    vec![
        Cell::new(layer_name),
        Cell::new(span.start.to_string()),
        Cell::new(span.end.to_string()),
        Cell::new(span.layer.color().to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_user_span_plain_range() {
        let arg = parse_user_span("0..8").unwrap();
        assert_eq!(arg.range, MatchRange::new(0, 8));
        assert!(arg.color.is_none());
    }

    #[test]
    fn parse_user_span_with_color() {
        let arg = parse_user_span("4..12@#112233").unwrap();
        assert_eq!(arg.range, MatchRange::new(4, 12));
        assert_eq!(arg.color, Some(Color::rgb(0x11, 0x22, 0x33)));
    }

    #[test]
    fn parse_user_span_rejects_garbage() {
        assert!(parse_user_span("nope").is_err());
        assert!(parse_user_span("3..x").is_err());
        assert!(parse_user_span("0..8@gold").is_err());
    }
}
