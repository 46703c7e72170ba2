//! hook-func-name rule (H001): Hook callbacks must be named functions
//!
//! A call whose callee is a hook (`useEffect(...)`, `React.useMemo(...)`,
//! `React?.useMemo(...)`) must receive a function with a discoverable name as its first argument, so the
//! callback shows up by name in stack traces and profilers.

use std::ops::ControlFlow;

use swc_common::Span;
use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, OptCall};

use crate::declare_rule;
use crate::diagnostic::{Diagnostic, Violation};
use crate::naming::{
    FunctionCursor, FunctionName, FunctionNode, ParentNode, get_function_name, is_hook,
};
use crate::parser::ParsedFile;
use crate::rules::{Rule, RuleMetadata};
use crate::visitor::{AstVisitor, VisitorContext, walk_ast};

pub const MESSAGE: &str = "Use named function";

declare_rule!(
    HookFuncName,
    id = "H001",
    name = "hook-func-name",
    description = "Require hook callbacks to be named functions",
    category = Hooks,
    severity = Warning,
    examples = "// Bad\nuseEffect(() => {\n  document.title = title;\n});\n\n// Good\nuseEffect(function syncTitle() {\n  document.title = title;\n});"
);

impl Rule for HookFuncName {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, file: &ParsedFile) -> Vec<Diagnostic> {
        let Some(module) = file.module() else {
            return Vec::new();
        };

        let ctx = VisitorContext::new(file);
        let mut visitor = HookFuncNameVisitor {
            diagnostics: Vec::new(),
            metadata: &self.metadata,
            file_path: file.filename().to_string(),
        };

        walk_ast(module, &mut visitor, &ctx);
        visitor.diagnostics
    }
}

/// Flags a hook call whose first argument has no resolvable name.
///
/// A missing, spread or non-function first argument has no name either and
/// is reported the same way.
pub fn check_hook_call(call: &CallExpr) -> Option<Violation> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    check_hook_arguments(callee, &call.args, call.span, ParentNode::Call(call))
}

/// Same check for `useThing?.(...)` and `Namespace?.useThing(...)`.
pub fn check_optional_hook_call(call: &OptCall) -> Option<Violation> {
    check_hook_arguments(&call.callee, &call.args, call.span, ParentNode::OptCall(call))
}

fn check_hook_arguments(
    callee: &Expr,
    args: &[ExprOrSpread],
    span: Span,
    parent: ParentNode<'_>,
) -> Option<Violation> {
    if !is_hook(callee) || first_argument_name(args, parent).is_some() {
        return None;
    }

    Some(Violation::new(span, MESSAGE))
}

fn first_argument_name<'a>(
    args: &'a [ExprOrSpread],
    parent: ParentNode<'a>,
) -> Option<FunctionName<'a>> {
    let arg = args.first().filter(|arg| arg.spread.is_none())?;
    let node = FunctionNode::from_expr(&arg.expr)?;
    get_function_name(&FunctionCursor::new(node, parent))
}

struct HookFuncNameVisitor<'m> {
    diagnostics: Vec<Diagnostic>,
    metadata: &'m RuleMetadata,
    file_path: String,
}

impl HookFuncNameVisitor<'_> {
    fn report(&mut self, violation: Violation, ctx: &VisitorContext) {
        let diagnostic = violation
            .into_diagnostic(self.metadata, &self.file_path, ctx)
            .with_suggestion("Pass a named function expression, e.g. function handleEffect() {}");
        self.diagnostics.push(diagnostic);
    }
}

impl AstVisitor for HookFuncNameVisitor<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr, ctx: &VisitorContext) -> ControlFlow<()> {
        if let Some(violation) = check_hook_call(node) {
            self.report(violation, ctx);
        }
        ControlFlow::Continue(())
    }

    fn visit_opt_call(&mut self, node: &OptCall, ctx: &VisitorContext) -> ControlFlow<()> {
        if let Some(violation) = check_optional_hook_call(node) {
            self.report(violation, ctx);
        }
        ControlFlow::Continue(())
    }
}
