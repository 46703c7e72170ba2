//! Output formatters for diagnostics

pub mod json;
pub mod pretty;

use colored::{ColoredString, Colorize};
use namelint_core::diagnostic::Diagnostic;
use namelint_core::rules::Severity;

pub fn severity_label(severity: Severity) -> ColoredString {
    let label = severity.as_str();
    match severity {
        Severity::Error => label.red().bold(),
        Severity::Warning => label.yellow().bold(),
        Severity::Info => label.blue().bold(),
        Severity::Hint => label.cyan().bold(),
    }
}

/// Error and warning counts, which decide the exit code and the summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub errors: usize,
    pub warnings: usize,
}

impl Tally {
    pub fn of(diagnostics: &[Diagnostic]) -> Self {
        diagnostics
            .iter()
            .fold(Self::default(), |mut tally, diag| {
                match diag.severity {
                    Severity::Error => tally.errors += 1,
                    Severity::Warning => tally.warnings += 1,
                    Severity::Info | Severity::Hint => {}
                }
                tally
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_ignores_info_and_hint() {
        let diagnostics: Vec<_> = [
            Severity::Error,
            Severity::Warning,
            Severity::Warning,
            Severity::Info,
            Severity::Hint,
        ]
        .into_iter()
        .map(|severity| Diagnostic::new("N002", severity, "m", "a.js", 1, 1))
        .collect();

        assert_eq!(
            Tally::of(&diagnostics),
            Tally {
                errors: 1,
                warnings: 2
            }
        );
    }

    #[test]
    fn labels_are_lowercase_severity_names() {
        colored::control::set_override(false);

        assert_eq!(severity_label(Severity::Warning).to_string(), "warning");
        assert_eq!(severity_label(Severity::Hint).to_string(), "hint");
    }
}
