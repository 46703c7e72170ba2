//! async-func-name rule (N001): Async function declarations end in `Async`

use std::ops::ControlFlow;

use swc_ecma_ast::{DefaultDecl, ExportDefaultDecl, FnDecl, Function, Ident};

use crate::declare_rule;
use crate::diagnostic::{Diagnostic, Violation};
use crate::parser::ParsedFile;
use crate::rules::{Rule, RuleMetadata};
use crate::visitor::{AstVisitor, VisitorContext, walk_ast};

pub const MESSAGE: &str = "Async function name must end in 'Async'";

const ASYNC_SUFFIX: &str = "Async";

declare_rule!(
    AsyncFuncName,
    id = "N001",
    name = "async-func-name",
    description = "Require async function declarations to end in 'Async'",
    category = Naming,
    severity = Warning,
    examples = "// Bad\nasync function loadData() {}\n\n// Good\nasync function loadDataAsync() {}"
);

impl Rule for AsyncFuncName {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, file: &ParsedFile) -> Vec<Diagnostic> {
        let Some(module) = file.module() else {
            return Vec::new();
        };

        let ctx = VisitorContext::new(file);
        let mut visitor = AsyncFuncNameVisitor {
            diagnostics: Vec::new(),
            metadata: &self.metadata,
            file_path: file.filename().to_string(),
        };

        walk_ast(module, &mut visitor, &ctx);
        visitor.diagnostics
    }
}

/// Flags an async function declaration whose name lacks the `Async` suffix.
pub fn check_async_declaration(name: &Ident, function: &Function) -> Option<Violation> {
    if !function.is_async || name.sym.ends_with(ASYNC_SUFFIX) {
        return None;
    }

    Some(Violation::new(function.span, MESSAGE))
}

struct AsyncFuncNameVisitor<'m> {
    diagnostics: Vec<Diagnostic>,
    metadata: &'m RuleMetadata,
    file_path: String,
}

impl AsyncFuncNameVisitor<'_> {
    fn report(&mut self, violation: Violation, ctx: &VisitorContext) {
        let diagnostic = violation.into_diagnostic(self.metadata, &self.file_path, ctx);
        self.diagnostics.push(diagnostic);
    }
}

impl AstVisitor for AsyncFuncNameVisitor<'_> {
    fn visit_fn_decl(&mut self, node: &FnDecl, ctx: &VisitorContext) -> ControlFlow<()> {
        if let Some(violation) = check_async_declaration(&node.ident, &node.function) {
            self.report(violation, ctx);
        }
        ControlFlow::Continue(())
    }

    fn visit_export_default_decl(
        &mut self,
        node: &ExportDefaultDecl,
        ctx: &VisitorContext,
    ) -> ControlFlow<()> {
        // `export default async function () {}` has no name to check
        if let DefaultDecl::Fn(fn_expr) = &node.decl {
            if let Some(ident) = &fn_expr.ident {
                if let Some(violation) = check_async_declaration(ident, &fn_expr.function) {
                    self.report(violation, ctx);
                }
            }
        }
        ControlFlow::Continue(())
    }
}
