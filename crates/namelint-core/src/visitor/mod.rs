//! One-pass AST walk feeding the nodes rules care about to an [`AstVisitor`]
//!
//! Function-like nodes are delivered as [`FunctionCursor`]s carrying their
//! immediate parent, built while the parent is being visited. Visitors that
//! do not set [`AstVisitor::WANTS_FUNCTION_LIKE`] pay nothing for this.

mod context;
mod traits;

pub use context::VisitorContext;
pub use traits::AstVisitor;

use std::collections::HashSet;
use std::ops::ControlFlow;

use swc_common::Span;
use swc_ecma_ast::{
    ArrowExpr, AssignExpr, AssignPat, AssignPatProp, CallExpr, ClassMember, ExportDefaultDecl,
    Expr, ExprOrSpread, FnDecl, FnExpr, GetterProp, ImportDecl, KeyValueProp, MethodProp, Module,
    OptCall, SetterProp, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::naming::{FunctionCursor, FunctionNode, ParentNode};

struct Walker<'a, V: AstVisitor> {
    visitor: &'a mut V,
    ctx: &'a VisitorContext<'a>,
    stopped: bool,
    /// Function expressions already delivered with a naming parent.
    claimed: HashSet<Span>,
}

impl<V: AstVisitor> Walker<'_, V> {
    fn deliver(&mut self, cursor: FunctionCursor<'_>) {
        if !V::WANTS_FUNCTION_LIKE || self.stopped {
            return;
        }
        if let ControlFlow::Break(()) = self.visitor.visit_function_like(cursor, self.ctx) {
            self.stopped = true;
        }
    }

    fn deliver_child(&mut self, expr: &Expr, parent: ParentNode<'_>) {
        if !V::WANTS_FUNCTION_LIKE {
            return;
        }
        if let Some(node) = FunctionNode::from_expr(expr) {
            self.claimed.insert(node.span());
            self.deliver(FunctionCursor::new(node, parent));
        }
    }

    fn deliver_unclaimed(&mut self, node: FunctionNode<'_>) {
        if V::WANTS_FUNCTION_LIKE && !self.claimed.remove(&node.span()) {
            self.deliver(FunctionCursor::new(node, ParentNode::Other));
        }
    }

    fn deliver_arguments(&mut self, args: &[ExprOrSpread], parent: ParentNode<'_>) {
        for arg in args.iter().filter(|arg| arg.spread.is_none()) {
            self.deliver_child(&arg.expr, parent);
        }
    }
}

impl<V: AstVisitor> Visit for Walker<'_, V> {
    fn visit_fn_decl(&mut self, node: &FnDecl) {
        if self.stopped {
            return;
        }
        if let ControlFlow::Break(()) = self.visitor.visit_fn_decl(node, self.ctx) {
            self.stopped = true;
            return;
        }
        self.deliver(FunctionCursor::new(FunctionNode::Decl(node), ParentNode::Other));
        node.visit_children_with(self);
    }

    fn visit_fn_expr(&mut self, node: &FnExpr) {
        if self.stopped {
            return;
        }
        self.deliver_unclaimed(FunctionNode::Expr(node));
        node.visit_children_with(self);
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        if self.stopped {
            return;
        }
        self.deliver_unclaimed(FunctionNode::Arrow(node));
        node.visit_children_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if self.stopped {
            return;
        }
        if let ControlFlow::Break(()) = self.visitor.visit_call_expr(node, self.ctx) {
            self.stopped = true;
            return;
        }
        self.deliver_arguments(&node.args, ParentNode::Call(node));
        node.visit_children_with(self);
    }

    fn visit_opt_call(&mut self, node: &OptCall) {
        if self.stopped {
            return;
        }
        if let ControlFlow::Break(()) = self.visitor.visit_opt_call(node, self.ctx) {
            self.stopped = true;
            return;
        }
        self.deliver_arguments(&node.args, ParentNode::OptCall(node));
        node.visit_children_with(self);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if self.stopped {
            return;
        }
        if let Some(init) = &node.init {
            self.deliver_child(init, ParentNode::VarDeclarator(node));
        }
        node.visit_children_with(self);
    }

    fn visit_assign_expr(&mut self, node: &AssignExpr) {
        if self.stopped {
            return;
        }
        self.deliver_child(&node.right, ParentNode::Assign(node));
        node.visit_children_with(self);
    }

    fn visit_key_value_prop(&mut self, node: &KeyValueProp) {
        if self.stopped {
            return;
        }
        self.deliver_child(&node.value, ParentNode::KeyValueProp(node));
        node.visit_children_with(self);
    }

    fn visit_method_prop(&mut self, node: &MethodProp) {
        if self.stopped {
            return;
        }
        self.deliver(FunctionCursor::new(
            FunctionNode::Method(&node.function),
            ParentNode::MethodProp(node),
        ));
        node.visit_children_with(self);
    }

    fn visit_getter_prop(&mut self, node: &GetterProp) {
        if self.stopped {
            return;
        }
        self.deliver(FunctionCursor::new(
            FunctionNode::Getter(node),
            ParentNode::GetterProp(node),
        ));
        node.visit_children_with(self);
    }

    fn visit_setter_prop(&mut self, node: &SetterProp) {
        if self.stopped {
            return;
        }
        self.deliver(FunctionCursor::new(
            FunctionNode::Setter(node),
            ParentNode::SetterProp(node),
        ));
        node.visit_children_with(self);
    }

    fn visit_assign_pat(&mut self, node: &AssignPat) {
        if self.stopped {
            return;
        }
        self.deliver_child(&node.right, ParentNode::AssignPat(node));
        node.visit_children_with(self);
    }

    fn visit_assign_pat_prop(&mut self, node: &AssignPatProp) {
        if self.stopped {
            return;
        }
        if let Some(value) = &node.value {
            self.deliver_child(value, ParentNode::AssignPatProp(node));
        }
        node.visit_children_with(self);
    }

    fn visit_class_member(&mut self, node: &ClassMember) {
        if self.stopped {
            return;
        }
        let parent = ParentNode::ClassMember(node);
        match node {
            ClassMember::Constructor(ctor) => {
                self.deliver(FunctionCursor::new(FunctionNode::Constructor(ctor), parent));
            }
            ClassMember::Method(method) => {
                self.deliver(FunctionCursor::new(FunctionNode::Method(&method.function), parent));
            }
            ClassMember::PrivateMethod(method) => {
                self.deliver(FunctionCursor::new(FunctionNode::Method(&method.function), parent));
            }
            ClassMember::ClassProp(prop) => {
                if let Some(value) = &prop.value {
                    self.deliver_child(value, parent);
                }
            }
            ClassMember::PrivateProp(prop) => {
                if let Some(value) = &prop.value {
                    self.deliver_child(value, parent);
                }
            }
            _ => {}
        }
        node.visit_children_with(self);
    }

    fn visit_import_decl(&mut self, node: &ImportDecl) {
        if self.stopped {
            return;
        }
        if let ControlFlow::Break(()) = self.visitor.visit_import_decl(node, self.ctx) {
            self.stopped = true;
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_export_default_decl(&mut self, node: &ExportDefaultDecl) {
        if self.stopped {
            return;
        }
        if let ControlFlow::Break(()) = self.visitor.visit_export_default_decl(node, self.ctx) {
            self.stopped = true;
            return;
        }
        node.visit_children_with(self);
    }
}

pub fn walk_ast<V: AstVisitor>(module: &Module, visitor: &mut V, ctx: &VisitorContext) {
    let mut walker = Walker {
        visitor,
        ctx,
        stopped: false,
        claimed: HashSet::new(),
    };
    module.visit_with(&mut walker);
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use swc_ecma_ast::{CallExpr, FnDecl, ImportDecl};

    use super::*;
    use crate::parser::ParsedFile;

    /// Records `kind: source text` for declarations, calls and imports,
    /// breaking once `stop_at` has been recorded.
    #[derive(Default)]
    struct Recorder {
        seen: Vec<String>,
        stop_at: Option<&'static str>,
    }

    impl Recorder {
        fn record(&mut self, kind: &str, text: &str) -> ControlFlow<()> {
            self.seen.push(format!("{}: {}", kind, text));
            match self.stop_at {
                Some(stop) if text.contains(stop) => ControlFlow::Break(()),
                _ => ControlFlow::Continue(()),
            }
        }
    }

    impl AstVisitor for Recorder {
        fn visit_fn_decl(&mut self, node: &FnDecl, _ctx: &VisitorContext) -> ControlFlow<()> {
            self.record("fn", &node.ident.sym)
        }

        fn visit_call_expr(&mut self, node: &CallExpr, ctx: &VisitorContext) -> ControlFlow<()> {
            self.record("call", ctx.get_source_text(node.span).unwrap_or_default())
        }

        fn visit_import_decl(&mut self, node: &ImportDecl, _ctx: &VisitorContext) -> ControlFlow<()> {
            self.record("import", &node.src.value.to_string())
        }
    }

    fn record(code: &str, stop_at: Option<&'static str>) -> Vec<String> {
        let parsed = ParsedFile::from_source("component.jsx", code);
        let ctx = VisitorContext::new(&parsed);
        let mut recorder = Recorder {
            stop_at,
            ..Default::default()
        };
        walk_ast(parsed.module().unwrap(), &mut recorder, &ctx);
        recorder.seen
    }

    const COMPONENT: &str = r#"
import logo from "./logo.svg";
async function loadUser(id) {
    return fetch(id);
}
export function Profile() {
    useEffect(function syncTitle() {}, []);
    return React.createElement("img", { src: logo });
}
"#;

    #[test]
    fn nodes_are_seen_in_source_order() {
        assert_eq!(
            record(COMPONENT, None),
            vec![
                "import: ./logo.svg",
                "fn: loadUser",
                "call: fetch(id)",
                "fn: Profile",
                "call: useEffect(function syncTitle() {}, [])",
                "call: React.createElement(\"img\", { src: logo })",
            ]
        );
    }

    #[test]
    fn break_stops_the_walk() {
        assert_eq!(
            record(COMPONENT, Some("Profile")),
            vec!["import: ./logo.svg", "fn: loadUser", "call: fetch(id)", "fn: Profile"]
        );
    }

    #[derive(Debug, PartialEq, Eq)]
    enum ParentKind {
        VarDeclarator,
        Assign,
        KeyValueProp,
        MethodProp,
        GetterProp,
        SetterProp,
        AssignPat,
        AssignPatProp,
        ClassMember,
        Call,
        OptCall,
        Other,
    }

    fn parent_kinds(code: &str) -> Vec<ParentKind> {
        struct ParentCollector {
            kinds: Vec<ParentKind>,
        }

        impl AstVisitor for ParentCollector {
            const WANTS_FUNCTION_LIKE: bool = true;

            fn visit_function_like(
                &mut self,
                cursor: FunctionCursor<'_>,
                _ctx: &VisitorContext,
            ) -> ControlFlow<()> {
                self.kinds.push(match cursor.parent {
                    ParentNode::VarDeclarator(_) => ParentKind::VarDeclarator,
                    ParentNode::Assign(_) => ParentKind::Assign,
                    ParentNode::KeyValueProp(_) => ParentKind::KeyValueProp,
                    ParentNode::MethodProp(_) => ParentKind::MethodProp,
                    ParentNode::GetterProp(_) => ParentKind::GetterProp,
                    ParentNode::SetterProp(_) => ParentKind::SetterProp,
                    ParentNode::AssignPat(_) => ParentKind::AssignPat,
                    ParentNode::AssignPatProp(_) => ParentKind::AssignPatProp,
                    ParentNode::ClassMember(_) => ParentKind::ClassMember,
                    ParentNode::Call(_) => ParentKind::Call,
                    ParentNode::OptCall(_) => ParentKind::OptCall,
                    ParentNode::Other => ParentKind::Other,
                });
                ControlFlow::Continue(())
            }
        }

        let parsed = ParsedFile::from_source("test.js", code);
        let ctx = VisitorContext::new(&parsed);
        let mut collector = ParentCollector { kinds: Vec::new() };
        walk_ast(parsed.module().unwrap(), &mut collector, &ctx);
        collector.kinds
    }

    #[test]
    fn each_function_is_delivered_once_with_its_parent() {
        let code = r#"
const a = () => {};
b = function () {};
const o = { c: () => {}, d() {} };
const { e = () => {} } = {};
const [f = () => {}] = [];
class G { h = () => {}; i() {} }
call(() => {});
[() => {}];
"#;

        assert_eq!(
            parent_kinds(code),
            vec![
                ParentKind::VarDeclarator,
                ParentKind::Assign,
                ParentKind::KeyValueProp,
                ParentKind::MethodProp,
                ParentKind::AssignPatProp,
                ParentKind::AssignPat,
                ParentKind::ClassMember,
                ParentKind::ClassMember,
                ParentKind::Call,
                ParentKind::Other,
            ]
        );
    }

    #[test]
    fn nested_functions_are_delivered_in_walk_order() {
        let code = r#"
function outer() {
    const inner = () => {
        return () => {};
    };
}
"#;

        assert_eq!(
            parent_kinds(code),
            vec![ParentKind::Other, ParentKind::VarDeclarator, ParentKind::Other]
        );
    }

    #[test]
    fn accessors_and_constructors_are_delivered() {
        let code = r#"
({ get useThing() { return 1; }, set useThing(value) {} });
class A { constructor() {} }
"#;

        assert_eq!(
            parent_kinds(code),
            vec![
                ParentKind::GetterProp,
                ParentKind::SetterProp,
                ParentKind::ClassMember,
            ]
        );
    }

    #[test]
    fn optional_call_arguments_are_claimed() {
        let code = r#"
useEffect?.(() => {});
React?.useState(function init() {});
"#;

        assert_eq!(parent_kinds(code), vec![ParentKind::OptCall, ParentKind::OptCall]);
    }

    #[test]
    fn visitor_finds_optional_calls() {
        let code = r#"
useEffect?.(f);
React?.useState(0);
plain(1);
"#;
        let parsed = ParsedFile::from_source("test.js", code);
        let ctx = VisitorContext::new(&parsed);

        struct OptCallCounter {
            count: usize,
        }

        impl AstVisitor for OptCallCounter {
            fn visit_opt_call(&mut self, _node: &OptCall, _ctx: &VisitorContext) -> ControlFlow<()> {
                self.count += 1;
                ControlFlow::Continue(())
            }
        }

        let mut counter = OptCallCounter { count: 0 };
        walk_ast(parsed.module().unwrap(), &mut counter, &ctx);

        assert_eq!(counter.count, 2);
    }

    #[test]
    fn function_like_requires_opting_in() {
        struct Silent {
            count: usize,
        }

        impl AstVisitor for Silent {
            fn visit_function_like(
                &mut self,
                _cursor: FunctionCursor<'_>,
                _ctx: &VisitorContext,
            ) -> ControlFlow<()> {
                self.count += 1;
                ControlFlow::Continue(())
            }
        }

        let parsed = ParsedFile::from_source("test.js", "const a = () => {};\nfunction b() {}");
        let ctx = VisitorContext::new(&parsed);
        let mut visitor = Silent { count: 0 };
        walk_ast(parsed.module().unwrap(), &mut visitor, &ctx);

        assert_eq!(visitor.count, 0);
    }
}
