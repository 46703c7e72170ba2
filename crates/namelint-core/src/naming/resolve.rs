//! Effective-name resolution for function-like nodes.
//!
//! Follows the precedence ECMAScript uses when naming anonymous functions: an
//! explicit identifier on the function always wins, otherwise the name comes
//! from the immediate binding context (variable declarator, `=` assignment,
//! object property key, default-value pattern). Class members are never
//! resolved, so hooks written as class members stay unnamed.

use swc_common::{Span, Spanned};
use swc_ecma_ast::{AssignOp, AssignTarget, Ident, MemberProp, Pat, PropName, SimpleAssignTarget};

use super::node::{FunctionCursor, FunctionNode, ParentNode};

/// The token a function's name was taken from.
#[derive(Debug, Clone, Copy)]
pub enum FunctionName<'a> {
    /// Explicit function id or binding identifier
    Ident(&'a Ident),
    /// Object property key
    Key(&'a PropName),
    /// Left-hand side of an assignment
    Target(&'a AssignTarget),
    /// Bound side of a declarator or default-value pattern
    Pattern(&'a Pat),
}

impl<'a> FunctionName<'a> {
    fn from_pat(pat: &'a Pat) -> Self {
        match pat {
            Pat::Ident(binding) => Self::Ident(&binding.id),
            other => Self::Pattern(other),
        }
    }

    fn from_target(target: &'a AssignTarget) -> Self {
        match target {
            AssignTarget::Simple(SimpleAssignTarget::Ident(binding)) => Self::Ident(&binding.id),
            other => Self::Target(other),
        }
    }

    /// Identifier-like text of the name, when the token has one.
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Ident(ident) => Some(ident.sym.to_string()),
            Self::Key(PropName::Ident(ident)) => Some(ident.sym.to_string()),
            Self::Key(PropName::Str(s)) => Some(s.value.to_string()),
            Self::Key(PropName::Num(n)) => Some(n.value.to_string()),
            Self::Key(_) => None,
            Self::Target(AssignTarget::Simple(SimpleAssignTarget::Member(member))) => {
                match &member.prop {
                    MemberProp::Ident(prop) => Some(prop.sym.to_string()),
                    _ => None,
                }
            }
            Self::Target(_) => None,
            Self::Pattern(Pat::Ident(binding)) => Some(binding.id.sym.to_string()),
            Self::Pattern(_) => None,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Ident(ident) => ident.span,
            Self::Key(key) => key.span(),
            Self::Target(target) => target.span(),
            Self::Pattern(pat) => pat.span(),
        }
    }
}

/// Resolves the effective name of the function under `cursor`.
///
/// Returns `None` when no recognized pattern names the function.
pub fn get_function_name<'a>(cursor: &FunctionCursor<'a>) -> Option<FunctionName<'a>> {
    let function = cursor.node;

    match function {
        // function useHook() {}
        // const whatever = function useHook() {};
        FunctionNode::Decl(decl) => return Some(FunctionName::Ident(&decl.ident)),
        FunctionNode::Expr(fn_expr) => {
            if let Some(ident) = &fn_expr.ident {
                return Some(FunctionName::Ident(ident));
            }
        }
        FunctionNode::Arrow(_)
        | FunctionNode::Method(_)
        | FunctionNode::Getter(_)
        | FunctionNode::Setter(_)
        | FunctionNode::Constructor(_) => {}
    }

    match cursor.parent {
        // const useHook = () => {};
        ParentNode::VarDeclarator(declarator) => declarator
            .init
            .as_deref()
            .filter(|init| function.is_expr(init))
            .map(|_| FunctionName::from_pat(&declarator.name)),

        // useHook = () => {};
        ParentNode::Assign(assign) => (assign.op == AssignOp::Assign
            && function.is_expr(&assign.right))
        .then(|| FunctionName::from_target(&assign.left)),

        // { useHook: () => {} }
        ParentNode::KeyValueProp(prop) => (!matches!(prop.key, PropName::Computed(_))
            && function.is_expr(&prop.value))
        .then_some(FunctionName::Key(&prop.key)),

        // { useHook() {} }
        ParentNode::MethodProp(prop) => (!matches!(prop.key, PropName::Computed(_))
            && function.is_function(&prop.function))
        .then_some(FunctionName::Key(&prop.key)),

        // { get useHook() {} }
        ParentNode::GetterProp(prop) => (!matches!(prop.key, PropName::Computed(_))
            && function.is_getter(prop))
        .then_some(FunctionName::Key(&prop.key)),

        // { set useHook(value) {} }
        ParentNode::SetterProp(prop) => (!matches!(prop.key, PropName::Computed(_))
            && function.is_setter(prop))
        .then_some(FunctionName::Key(&prop.key)),

        // const [useHook = () => {}] = [];
        // function f(useHook = () => {}) {}
        ParentNode::AssignPat(pat) => function
            .is_expr(&pat.right)
            .then(|| FunctionName::from_pat(&pat.left)),

        // const { useHook = () => {} } = {};
        // ({ useHook = () => {} } = {});
        ParentNode::AssignPatProp(prop) => prop
            .value
            .as_deref()
            .filter(|value| function.is_expr(value))
            .map(|_| FunctionName::Ident(&prop.key.id)),

        // class { useHook = () => {} }
        // class { useHook() {} }
        // class { constructor() {} }
        ParentNode::ClassMember(_) => None,

        ParentNode::Call(_) | ParentNode::OptCall(_) | ParentNode::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsedFile;
    use crate::visitor::{AstVisitor, VisitorContext, walk_ast};
    use std::ops::ControlFlow;

    /// Resolves every function-like node in `code`, in walk order.
    fn resolve_all(code: &str) -> Vec<Option<String>> {
        struct Collector {
            names: Vec<Option<String>>,
        }

        impl AstVisitor for Collector {
            const WANTS_FUNCTION_LIKE: bool = true;

            fn visit_function_like(
                &mut self,
                cursor: FunctionCursor<'_>,
                _ctx: &VisitorContext,
            ) -> ControlFlow<()> {
                let name = get_function_name(&cursor).map(|name| name.text().unwrap_or_default());
                self.names.push(name);
                ControlFlow::Continue(())
            }
        }

        let file = ParsedFile::from_source("test.js", code);
        let ctx = VisitorContext::new(&file);
        let mut collector = Collector { names: Vec::new() };
        walk_ast(file.module().unwrap(), &mut collector, &ctx);
        collector.names
    }

    fn resolve_single(code: &str) -> Option<String> {
        let names = resolve_all(code);
        assert_eq!(names.len(), 1, "expected one function in {:?}", code);
        names.into_iter().next().unwrap()
    }

    #[test]
    fn function_declaration_uses_its_id() {
        assert_eq!(resolve_single("function useThing() {}"), Some("useThing".into()));
    }

    #[test]
    fn explicit_name_wins_over_binding() {
        assert_eq!(
            resolve_single("const other = function useThing() {};"),
            Some("useThing".into())
        );
    }

    #[test]
    fn variable_declarator_binding() {
        assert_eq!(resolve_single("const useThing = () => {};"), Some("useThing".into()));
        assert_eq!(
            resolve_single("let useThing = function () {};"),
            Some("useThing".into())
        );
    }

    #[test]
    fn parenthesized_initializer_is_still_the_init() {
        assert_eq!(resolve_single("const useThing = (() => {});"), Some("useThing".into()));
    }

    #[test]
    fn simple_assignment_target() {
        assert_eq!(resolve_single("useThing = () => {};"), Some("useThing".into()));
    }

    #[test]
    fn member_assignment_target_is_a_name() {
        assert_eq!(resolve_single("hooks.useThing = () => {};"), Some("useThing".into()));
    }

    #[test]
    fn compound_assignment_is_not_a_name() {
        assert_eq!(resolve_single("useThing ||= () => {};"), None);
    }

    #[test]
    fn object_property_key() {
        assert_eq!(resolve_single("({ useThing: () => {} });"), Some("useThing".into()));
        assert_eq!(resolve_single("({ 'useThing': () => {} });"), Some("useThing".into()));
    }

    #[test]
    fn object_method_key() {
        assert_eq!(resolve_single("({ useThing() {} });"), Some("useThing".into()));
    }

    #[test]
    fn object_accessor_keys() {
        let names = resolve_all("({ get useThing() { return 1; }, set useOther(value) {} });");

        assert_eq!(names, vec![Some("useThing".into()), Some("useOther".into())]);
    }

    #[test]
    fn computed_accessor_keys_are_not_names() {
        assert_eq!(resolve_single("({ get [key]() { return 1; } });"), None);
    }

    #[test]
    fn constructors_are_unnamed() {
        let names = resolve_all("class Store { constructor() {} }");

        assert_eq!(names, vec![None]);
    }

    #[test]
    fn computed_object_keys_are_not_names() {
        assert_eq!(resolve_single("({ [key]: () => {} });"), None);
        assert_eq!(resolve_single("({ [key]() {} });"), None);
    }

    #[test]
    fn destructuring_default_value() {
        assert_eq!(
            resolve_single("const { useThing = () => {} } = {};"),
            Some("useThing".into())
        );
        assert_eq!(
            resolve_single("({ useThing = () => {} } = {});"),
            Some("useThing".into())
        );
    }

    #[test]
    fn renamed_and_positional_defaults() {
        assert_eq!(
            resolve_single("const { a: useThing = () => {} } = {};"),
            Some("useThing".into())
        );
        assert_eq!(
            resolve_single("const [useThing = () => {}] = [];"),
            Some("useThing".into())
        );
    }

    #[test]
    fn parameter_default_value() {
        let names = resolve_all("function host(useThing = () => {}) {}");

        assert_eq!(names, vec![Some("host".into()), Some("useThing".into())]);
    }

    #[test]
    fn bare_call_argument_is_unnamed() {
        assert_eq!(resolve_single("setTimeout(() => {}, 0);"), None);
    }

    #[test]
    fn class_members_are_unnamed() {
        let names = resolve_all("class Store { useThing = () => {}; useOther() {} }");

        assert_eq!(names, vec![None, None]);
    }

    #[test]
    fn unbound_expressions_are_unnamed() {
        assert_eq!(resolve_single("export default () => {};"), None);
        assert_eq!(resolve_single("[() => {}];"), None);
    }

    #[test]
    fn initializer_must_be_the_function_itself() {
        let names = resolve_all("const useThing = wrap(() => {});");

        assert_eq!(names, vec![None]);
    }

    #[test]
    fn name_span_points_at_binding() {
        let file = ParsedFile::from_source("test.js", "const useThing = () => {};");
        let ctx = VisitorContext::new(&file);

        struct SpanCollector<'c> {
            text: Option<String>,
            ctx: &'c VisitorContext<'c>,
        }

        impl AstVisitor for SpanCollector<'_> {
            const WANTS_FUNCTION_LIKE: bool = true;

            fn visit_function_like(
                &mut self,
                cursor: FunctionCursor<'_>,
                _ctx: &VisitorContext,
            ) -> ControlFlow<()> {
                let name = get_function_name(&cursor).unwrap();
                self.text = self.ctx.get_source_text(name.span()).map(str::to_string);
                ControlFlow::Break(())
            }
        }

        let mut collector = SpanCollector { text: None, ctx: &ctx };
        walk_ast(file.module().unwrap(), &mut collector, &ctx);

        assert_eq!(collector.text.as_deref(), Some("useThing"));
    }
}
