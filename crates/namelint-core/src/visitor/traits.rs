//! AstVisitor trait for uniform AST traversal.

use std::ops::ControlFlow;

use swc_ecma_ast::{CallExpr, ExportDefaultDecl, FnDecl, ImportDecl, OptCall};

use super::context::VisitorContext;
use crate::naming::FunctionCursor;

pub trait AstVisitor {
    /// Opts in to [`AstVisitor::visit_function_like`]. Parent tracking is
    /// skipped entirely for visitors that leave this off.
    const WANTS_FUNCTION_LIKE: bool = false;

    fn visit_fn_decl(&mut self, _node: &FnDecl, _ctx: &VisitorContext) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    fn visit_call_expr(&mut self, _node: &CallExpr, _ctx: &VisitorContext) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// `callee?.(...)` and `object?.callee(...)`
    fn visit_opt_call(&mut self, _node: &OptCall, _ctx: &VisitorContext) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    fn visit_import_decl(&mut self, _node: &ImportDecl, _ctx: &VisitorContext) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    fn visit_export_default_decl(
        &mut self,
        _node: &ExportDefaultDecl,
        _ctx: &VisitorContext,
    ) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for every function, arrow, method, accessor and
    /// constructor, together with its parent. Requires `WANTS_FUNCTION_LIKE`.
    fn visit_function_like(
        &mut self,
        _cursor: FunctionCursor<'_>,
        _ctx: &VisitorContext,
    ) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
