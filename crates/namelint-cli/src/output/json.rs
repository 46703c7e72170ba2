//! JSON report for scripts and CI
//!
//! ```json
//! {
//!   "namelint_version": "0.1.0",
//!   "files": 12,
//!   "summary": { "total": 3, "files_with_issues": 2, "by_severity": {..}, "by_rule": {..} },
//!   "diagnostics": [{ "rule_id": "H001", "rule_name": "hook-func-name", .. }]
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};

use namelint_core::diagnostic::Diagnostic;
use namelint_core::rules::{RuleRegistry, Severity};
use serde::Serialize;

const SEVERITIES: [Severity; 4] = [
    Severity::Error,
    Severity::Warning,
    Severity::Info,
    Severity::Hint,
];

#[derive(Serialize)]
struct Report<'a> {
    namelint_version: &'static str,
    files: usize,
    summary: Summary<'a>,
    diagnostics: Vec<Entry<'a>>,
}

#[derive(Serialize)]
struct Summary<'a> {
    total: usize,
    files_with_issues: usize,
    /// Every severity is listed, zero counts included.
    by_severity: BTreeMap<&'static str, usize>,
    by_rule: BTreeMap<&'a str, usize>,
}

#[derive(Serialize)]
struct Entry<'a> {
    rule_id: &'a str,
    /// Absent for `PARSE` diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    rule_name: Option<&'static str>,
    severity: &'static str,
    message: &'a str,
    file: &'a str,
    start: Position,
    end: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

#[derive(Serialize)]
struct Position {
    line: usize,
    column: usize,
}

impl Summary<'_> {
    fn of(diagnostics: &[Diagnostic]) -> Summary<'_> {
        let mut by_severity: BTreeMap<&'static str, usize> =
            SEVERITIES.iter().map(|s| (s.as_str(), 0)).collect();
        let mut by_rule = BTreeMap::new();
        let mut files = BTreeSet::new();

        for diag in diagnostics {
            *by_severity.entry(diag.severity.as_str()).or_default() += 1;
            *by_rule.entry(diag.rule_id.as_str()).or_default() += 1;
            files.insert(diag.file.as_str());
        }

        Summary {
            total: diagnostics.len(),
            files_with_issues: files.len(),
            by_severity,
            by_rule,
        }
    }
}

fn entry<'a>(diag: &'a Diagnostic, registry: &RuleRegistry) -> Entry<'a> {
    Entry {
        rule_id: &diag.rule_id,
        rule_name: registry
            .get_rule(&diag.rule_id)
            .map(|rule| rule.metadata().name),
        severity: diag.severity.as_str(),
        message: &diag.message,
        file: &diag.file,
        start: Position {
            line: diag.line,
            column: diag.column,
        },
        end: Position {
            line: diag.end_line,
            column: diag.end_column,
        },
        suggestion: diag.suggestion.as_deref(),
    }
}

pub fn render(
    diagnostics: &[Diagnostic],
    files: usize,
    registry: &RuleRegistry,
) -> serde_json::Result<String> {
    let report = Report {
        namelint_version: env!("CARGO_PKG_VERSION"),
        files,
        summary: Summary::of(diagnostics),
        diagnostics: diagnostics.iter().map(|d| entry(d, registry)).collect(),
    };
    serde_json::to_string_pretty(&report)
}
