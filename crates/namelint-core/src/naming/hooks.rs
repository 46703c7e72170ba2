//! Hook call classification.

use std::sync::LazyLock;

use regex::Regex;
use swc_ecma_ast::{Expr, MemberExpr, MemberProp, OptChainBase};

use super::node::strip_parens;

static HOOK_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^use[A-Z0-9].*$").expect("Invalid regex pattern"));

static PASCAL_CASE_NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z].*").expect("Invalid regex pattern"));

/// `use` followed by an uppercase letter or digit: `useState`, `use3D`.
pub fn is_hook_name(name: &str) -> bool {
    HOOK_NAME.is_match(name)
}

/// Whether a call target denotes a hook.
///
/// Accepts a bare hook identifier (`useThing`) or a non-computed member access
/// on a PascalCase namespace identifier (`React.useState`), optionally chained
/// (`React?.useState`). Deeper chains, computed access and every other
/// expression shape are not hooks.
pub fn is_hook(callee: &Expr) -> bool {
    match strip_parens(callee) {
        Expr::Ident(ident) => is_hook_name(ident.sym.as_ref()),
        Expr::Member(member) => is_namespaced_hook(member),
        Expr::OptChain(chain) => match &*chain.base {
            OptChainBase::Member(member) => is_namespaced_hook(member),
            OptChainBase::Call(_) => false,
        },
        _ => false,
    }
}

fn is_namespaced_hook(member: &MemberExpr) -> bool {
    let MemberProp::Ident(prop) = &member.prop else {
        return false;
    };
    is_hook_name(prop.sym.as_ref())
        && matches!(
            strip_parens(&member.obj),
            Expr::Ident(obj) if PASCAL_CASE_NAMESPACE.is_match(obj.sym.as_ref())
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsedFile;
    use swc_ecma_ast::{Callee, ModuleItem, Stmt};

    fn opt_callee_of(code: &str) -> Box<Expr> {
        let module = ParsedFile::from_source("test.js", code).module().unwrap().clone();
        let Some(ModuleItem::Stmt(Stmt::Expr(stmt))) = module.body.into_iter().next() else {
            panic!("Expected expression statement");
        };
        let Expr::OptChain(chain) = *stmt.expr else {
            panic!("Expected optional chain");
        };
        match *chain.base {
            OptChainBase::Call(call) => call.callee,
            other => panic!("Unexpected chain base {:?}", other),
        }
    }

    fn callee_of(code: &str) -> Box<Expr> {
        let module = ParsedFile::from_source("test.js", code).module().unwrap().clone();
        let Some(ModuleItem::Stmt(Stmt::Expr(stmt))) = module.body.into_iter().next() else {
            panic!("Expected expression statement");
        };
        let Expr::Call(call) = *stmt.expr else {
            panic!("Expected call expression");
        };
        match call.callee {
            Callee::Expr(expr) => expr,
            other => panic!("Unexpected callee {:?}", other),
        }
    }

    #[test]
    fn hook_names_follow_use_prefix_convention() {
        assert!(is_hook_name("useState"));
        assert!(is_hook_name("useX"));
        assert!(is_hook_name("use3DModel"));
        assert!(is_hook_name("use0"));

        assert!(!is_hook_name("use"));
        assert!(!is_hook_name("user"));
        assert!(!is_hook_name("usestate"));
        assert!(!is_hook_name("_useState"));
        assert!(!is_hook_name("Usestate"));
        assert!(!is_hook_name("reuseState"));
    }

    #[test]
    fn bare_identifier_callee() {
        assert!(is_hook(&callee_of("useEffect(f);")));
        assert!(is_hook(&callee_of("(useEffect)(f);")));
        assert!(!is_hook(&callee_of("setTimeout(f, 0);")));
    }

    #[test]
    fn pascal_case_namespace_member() {
        assert!(is_hook(&callee_of("React.useState(f);")));
        assert!(is_hook(&callee_of("Foo.useBar(f);")));
    }

    #[test]
    fn lowercase_namespace_is_not_a_hook() {
        assert!(!is_hook(&callee_of("foo.useBar(f);")));
        assert!(!is_hook(&callee_of("this.useBar(f);")));
    }

    #[test]
    fn computed_access_is_never_a_hook() {
        assert!(!is_hook(&callee_of("Foo['useBar'](f);")));
        assert!(!is_hook(&callee_of("Foo[useBar](f);")));
    }

    #[test]
    fn member_property_must_be_hook_name() {
        assert!(!is_hook(&callee_of("React.createElement(f);")));
    }

    #[test]
    fn nested_namespaces_are_not_hooks() {
        assert!(!is_hook(&callee_of("App.React.useState(f);")));
    }

    #[test]
    fn other_callee_shapes_are_not_hooks() {
        assert!(!is_hook(&callee_of("getHook()(f);")));
        assert!(!is_hook(&callee_of("(() => {})(f);")));
    }

    #[test]
    fn optional_chained_callees() {
        assert!(is_hook(&opt_callee_of("useEffect?.(f);")));
        assert!(is_hook(&opt_callee_of("React?.useState(f);")));
        assert!(is_hook(&opt_callee_of("React.useState?.(f);")));
        assert!(!is_hook(&opt_callee_of("hooks?.useThing(f);")));
        assert!(!is_hook(&opt_callee_of("React?.createElement(f);")));
        assert!(!is_hook(&opt_callee_of("getHook?.()(f);")));
    }
}
