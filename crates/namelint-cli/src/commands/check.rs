//! `namelint check`: analyze a file or a directory tree

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use namelint_core::analysis::AnalysisEngine;
use namelint_core::config::load_config_or_default_with_warnings;
use namelint_core::diagnostic::Diagnostic;
use namelint_core::parser::ParsedFile;
use namelint_core::rules::Severity;
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use crate::output::{Tally, json, pretty, severity_label};

const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"];

const SEVERITIES: [Severity; 4] = [
    Severity::Error,
    Severity::Warning,
    Severity::Info,
    Severity::Hint,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Pretty,
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File or directory to check
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// pretty, text or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Exit with status 1 on warnings too
    #[arg(long)]
    pub fail_on_warnings: bool,

    /// Hide diagnostics below this severity (error, warning, info, hint)
    #[arg(long, value_name = "LEVEL")]
    pub severity: Option<String>,

    #[arg(long)]
    pub no_color: bool,
}

/// Everything one run produced, kept until it is rendered.
struct CheckReport {
    engine: AnalysisEngine,
    diagnostics: Vec<Diagnostic>,
    /// Source text by file name, for excerpts
    sources: HashMap<String, String>,
    total_files: usize,
}

impl CheckReport {
    fn should_fail(&self, fail_on_warnings: bool) -> bool {
        let tally = Tally::of(&self.diagnostics);
        tally.errors > 0 || (fail_on_warnings && tally.warnings > 0)
    }
}

impl CheckArgs {
    pub fn run(&self) -> Result<()> {
        if self.no_color || std::env::var_os("NO_COLOR").is_some() {
            colored::control::set_override(false);
        }

        let format = self.output_format()?;
        let Some(report) = self.collect()? else {
            println!("No JavaScript/TypeScript files found.");
            return Ok(());
        };

        match format {
            Format::Pretty => print!("{}", pretty::render(&report.diagnostics, &report.sources)),
            Format::Text => print_text(&report.diagnostics),
            Format::Json => println!(
                "{}",
                json::render(
                    &report.diagnostics,
                    report.total_files,
                    report.engine.registry()
                )?
            ),
        }

        if report.should_fail(self.fail_on_warnings) {
            process::exit(1);
        }
        Ok(())
    }

    fn output_format(&self) -> Result<Format> {
        match self.format.as_str() {
            "pretty" => Ok(Format::Pretty),
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => anyhow::bail!("Invalid format '{}'. Valid values: pretty, text, json", other),
        }
    }

    /// Least severe level still shown. Everything is shown by default.
    fn min_severity(&self) -> Result<Severity> {
        let Some(requested) = self.severity.as_deref() else {
            return Ok(Severity::Hint);
        };
        SEVERITIES
            .into_iter()
            .find(|severity| severity.as_str() == requested)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid severity '{}'. Valid values: error, warning, info, hint",
                    requested
                )
            })
    }

    /// Validates the arguments and analyzes every discovered file.
    /// `None` when there is nothing to analyze.
    fn collect(&self) -> Result<Option<CheckReport>> {
        self.output_format()?;
        let min_severity = self.min_severity()?;

        let config = load_config_or_default_with_warnings(&self.path);
        for warning in &config.warnings {
            eprintln!("{} {}", "warning:".yellow().bold(), warning);
        }

        let files = discover_files(&self.path)?;
        if files.is_empty() {
            return Ok(None);
        }
        tracing::debug!(files = files.len(), path = %self.path.display(), "discovered files");

        let engine = AnalysisEngine::with_config(&config.config);
        let analyzed: Vec<(String, String, Vec<Diagnostic>)> = files
            .par_iter()
            .filter_map(|path| analyze_file(&engine, path))
            .collect();

        let mut report = CheckReport {
            engine,
            diagnostics: Vec::new(),
            sources: HashMap::with_capacity(analyzed.len()),
            total_files: files.len(),
        };
        for (name, source, diagnostics) in analyzed {
            report.diagnostics.extend(
                diagnostics
                    .into_iter()
                    .filter(|d| is_at_least(d.severity, min_severity)),
            );
            report.sources.insert(name, source);
        }

        Ok(Some(report))
    }
}

/// Unreadable files are logged and skipped.
fn analyze_file(engine: &AnalysisEngine, path: &Path) -> Option<(String, String, Vec<Diagnostic>)> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "skipping unreadable file");
            return None;
        }
    };
    let name = path.to_string_lossy().into_owned();
    let diagnostics = engine.analyze(&ParsedFile::from_source(&name, &source));
    Some((name, source, diagnostics))
}

fn is_at_least(severity: Severity, min: Severity) -> bool {
    let rank = |s: Severity| SEVERITIES.iter().position(|&known| known == s);
    rank(severity) <= rank(min)
}

fn print_text(diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        println!("{}", format_text_line(diag));
        if let Some(suggestion) = &diag.suggestion {
            println!("  {} {}", "suggestion:".green(), suggestion);
        }
    }

    if !diagnostics.is_empty() {
        let tally = Tally::of(diagnostics);
        println!(
            "\nFound {} error(s) and {} warning(s)",
            tally.errors, tally.warnings
        );
    }
}

fn format_text_line(diag: &Diagnostic) -> String {
    format!(
        "{}:{}:{}: {} [{}]: {}",
        diag.file,
        diag.line,
        diag.column,
        severity_label(diag.severity),
        diag.rule_id.dimmed(),
        diag.message
    )
}

/// Source files under `path` in sorted order, or `path` itself when it is a
/// source file.
fn discover_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && is_source_file(entry.path()))
        .map(DirEntry::into_path)
        .collect();
    files.sort();

    Ok(files)
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Hidden entries and `node_modules`.
fn is_skipped_dir(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == "node_modules"
}
