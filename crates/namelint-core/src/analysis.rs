//! Runs the built-in rules over a parsed file
//!
//! Parse errors surface as `PARSE` diagnostics ahead of rule output, and
//! `namelint-disable` directives are applied to both.

use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::parser::ParsedFile;
use crate::rules::hooks::HookFuncName;
use crate::rules::naming::{AsyncFuncName, ConstNamingConvention, SvgFileName};
use crate::rules::{RuleRegistry, Severity};

pub const PARSE_RULE_ID: &str = "PARSE";

pub struct AnalysisEngine {
    registry: RuleRegistry,
}

impl AnalysisEngine {
    /// Every built-in rule at its default settings.
    pub fn new() -> Self {
        Self {
            registry: builtin_rules(),
        }
    }

    pub fn with_config(config: &Config) -> Self {
        let mut engine = Self::new();
        engine.registry.configure(&config.rules);
        engine
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn analyze(&self, file: &ParsedFile) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = file
            .errors()
            .iter()
            .map(|error| {
                Diagnostic::new(
                    PARSE_RULE_ID,
                    Severity::Error,
                    &error.message,
                    file.filename(),
                    error.line,
                    error.column,
                )
            })
            .collect();
        diagnostics.extend(self.registry.run_all(file));
        diagnostics.retain(|diagnostic| !self.is_suppressed(file, diagnostic));

        tracing::debug!(
            file = %file.filename(),
            parse_errors = file.errors().len(),
            diagnostics = diagnostics.len(),
            "analyzed file"
        );
        diagnostics
    }

    /// Directives may name a rule by id or by name.
    fn is_suppressed(&self, file: &ParsedFile, diagnostic: &Diagnostic) -> bool {
        let directives = file.disable_directives();
        let line = diagnostic.line;

        directives.is_disabled(line, &diagnostic.rule_id)
            || self
                .registry
                .get_rule(&diagnostic.rule_id)
                .is_some_and(|rule| directives.is_disabled(line, rule.metadata().name))
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration order is also output order.
fn builtin_rules() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(Box::new(HookFuncName::new()));
    registry.register(Box::new(AsyncFuncName::new()));
    registry.register(Box::new(ConstNamingConvention::new()));
    registry.register(Box::new(SvgFileName::new()));
    registry
}
