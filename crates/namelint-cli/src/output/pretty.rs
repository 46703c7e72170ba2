//! Terminal rendering with source excerpts
//!
//! ```text
//! warning[H001]: Use named function
//!   --> src/App.js:4:3
//!   |
//! 4 |   useEffect(() => {
//!   |   ^^^^^^^^^^^^^^^^^
//!   |
//!   = suggestion: Pass a named function expression
//! ```

use std::collections::HashMap;
use std::fmt::Write;

use colored::Colorize;
use namelint_core::diagnostic::Diagnostic;

use super::{Tally, severity_label};

/// Renders every diagnostic followed by a summary. `sources` maps file names
/// to their contents; files missing from it are shown without an excerpt.
pub fn render(diagnostics: &[Diagnostic], sources: &HashMap<String, String>) -> String {
    if diagnostics.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for diag in diagnostics {
        let line = sources
            .get(&diag.file)
            .and_then(|source| source.lines().nth(diag.line.checked_sub(1)?));
        write_diagnostic(&mut out, diag, line);
        out.push('\n');
    }
    write_summary(&mut out, Tally::of(diagnostics), diagnostics.len());
    out
}

fn write_diagnostic(out: &mut String, diag: &Diagnostic, source_line: Option<&str>) {
    let gutter = " ".repeat(diag.line.to_string().len());
    let bar = "|".blue();

    let _ = writeln!(
        out,
        "{}[{}]: {}",
        severity_label(diag.severity),
        diag.rule_id.dimmed(),
        diag.message
    );
    let _ = writeln!(
        out,
        "{}{} {}:{}:{}",
        gutter,
        "-->".blue(),
        diag.file,
        diag.line,
        diag.column
    );

    if let Some(source_line) = source_line {
        let indent = " ".repeat(diag.column.saturating_sub(1));
        let carets = "^".repeat(underline_width(diag, source_line));
        let _ = writeln!(out, "{} {}", gutter, bar);
        let _ = writeln!(out, "{} {} {}", diag.line.to_string().blue(), bar, source_line);
        let _ = writeln!(out, "{} {} {}{}", gutter, bar, indent, carets.red());
        let _ = writeln!(out, "{} {}", gutter, bar);
    }

    if let Some(suggestion) = &diag.suggestion {
        let _ = writeln!(
            out,
            "{} {} {} {}",
            gutter,
            "=".blue(),
            "suggestion:".green(),
            suggestion
        );
    }
}

/// Single-line spans are underlined exactly. Spans running past their first
/// line are underlined to its end.
fn underline_width(diag: &Diagnostic, source_line: &str) -> usize {
    let width = if diag.end_line == diag.line && diag.end_column > diag.column {
        diag.end_column - diag.column
    } else {
        source_line
            .chars()
            .count()
            .saturating_sub(diag.column.saturating_sub(1))
    };
    width.max(1)
}

fn write_summary(out: &mut String, tally: Tally, total: usize) {
    let _ = writeln!(
        out,
        "\nFound {} {} ({}, {})",
        total.to_string().bold(),
        plural(total, "problem"),
        format!("{} {}", tally.errors, plural(tally.errors, "error")).red(),
        format!("{} {}", tally.warnings, plural(tally.warnings, "warning")).yellow()
    );
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}
