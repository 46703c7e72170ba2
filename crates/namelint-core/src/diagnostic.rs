//! Diagnostic reporting for analysis results
//!
//! Provides structured diagnostic information for issues found during analysis.

use swc_common::Span;

use crate::rules::{RuleMetadata, Severity};
use crate::visitor::VisitorContext;

/// A rule violation anchored at a syntax node, before it is located in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub span: Span,
    pub message: String,
}

impl Violation {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    pub fn into_diagnostic(
        self,
        metadata: &RuleMetadata,
        file_path: &str,
        ctx: &VisitorContext,
    ) -> Diagnostic {
        let (line, column, end_line, end_column) = ctx.span_to_range(self.span);

        Diagnostic::new(
            metadata.id,
            metadata.severity,
            self.message,
            file_path,
            line,
            column,
        )
        .with_end(end_line, end_column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        file: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity,
            message: message.into(),
            file: file.into(),
            line,
            column,
            end_line: line,
            end_column: column,
            suggestion: None,
        }
    }

    pub fn with_end(mut self, end_line: usize, end_column: usize) -> Self {
        self.end_line = end_line;
        self.end_column = end_column;
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsedFile;
    use crate::rules::RuleCategory;
    use swc_common::BytePos;

    #[test]
    fn new_diagnostic_ends_where_it_starts() {
        let diag = Diagnostic::new("N001", Severity::Warning, "msg", "a.js", 3, 5);

        assert_eq!(diag.end_line, 3);
        assert_eq!(diag.end_column, 5);
        assert!(diag.suggestion.is_none());
    }

    #[test]
    fn builder_sets_end_and_suggestion() {
        let diag = Diagnostic::new("N001", Severity::Warning, "msg", "a.js", 1, 1)
            .with_end(2, 4)
            .with_suggestion("rename it");

        assert_eq!((diag.end_line, diag.end_column), (2, 4));
        assert_eq!(diag.suggestion.as_deref(), Some("rename it"));
    }

    #[test]
    fn violation_is_located_through_context() {
        let file = ParsedFile::from_source("a.js", "let a;\nfoo();");
        let ctx = VisitorContext::new(&file);
        let metadata = RuleMetadata {
            id: "H001",
            name: "hook-func-name",
            description: "",
            category: RuleCategory::Hooks,
            severity: Severity::Warning,
            examples: None,
        };

        let base = file.start_pos().0;
        let span = Span::new(BytePos(base + 7), BytePos(base + 12));
        let diag =
            Violation::new(span, "Use named function").into_diagnostic(&metadata, "a.js", &ctx);

        assert_eq!(diag.rule_id, "H001");
        assert_eq!(diag.message, "Use named function");
        assert_eq!(diag.file, "a.js");
        assert_eq!((diag.line, diag.column), (2, 1));
        assert_eq!((diag.end_line, diag.end_column), (2, 6));
    }
}
