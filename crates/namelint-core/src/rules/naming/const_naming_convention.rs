//! const-naming-convention rule (N002): Top-level constants use UPPER_CASE
//!
//! Only `const` statements sitting directly in the module body are checked.
//! Exported declarations, declarations inside functions or blocks, and
//! destructuring bindings are left alone.

use std::sync::LazyLock;

use regex::Regex;
use swc_ecma_ast::{Decl, ModuleItem, Pat, Stmt, VarDecl, VarDeclKind};

use crate::declare_rule;
use crate::diagnostic::{Diagnostic, Violation};
use crate::parser::ParsedFile;
use crate::rules::{Rule, RuleMetadata};
use crate::visitor::VisitorContext;

static UPPER_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z_]+$").expect("Invalid regex pattern"));

declare_rule!(
    ConstNamingConvention,
    id = "N002",
    name = "const-naming-convention",
    description = "Require top-level constants to follow UPPER_CASE convention",
    category = Naming,
    severity = Warning,
    examples = "// Bad\nconst apiUrl = 'https://example.com';\n\n// Good\nconst API_URL = 'https://example.com';"
);

impl Rule for ConstNamingConvention {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, file: &ParsedFile) -> Vec<Diagnostic> {
        let Some(module) = file.module() else {
            return Vec::new();
        };

        let ctx = VisitorContext::new(file);
        let file_path = file.filename();

        module
            .body
            .iter()
            .filter_map(|item| match item {
                ModuleItem::Stmt(Stmt::Decl(Decl::Var(var_decl))) => Some(var_decl.as_ref()),
                _ => None,
            })
            .flat_map(check_const_declaration)
            .map(|violation| violation.into_diagnostic(&self.metadata, file_path, &ctx))
            .collect()
    }
}

/// Flags every identifier bound by a top-level `const` declaration that is
/// not UPPER_CASE. All violations are anchored at the declaration itself.
pub fn check_const_declaration(decl: &VarDecl) -> Vec<Violation> {
    if decl.kind != VarDeclKind::Const {
        return Vec::new();
    }

    decl.decls
        .iter()
        .filter_map(|declarator| match &declarator.name {
            Pat::Ident(binding) => Some(binding.id.sym.as_ref()),
            _ => None,
        })
        .filter(|name| !UPPER_CASE.is_match(name))
        .map(|name| {
            Violation::new(
                decl.span,
                format!("constant '{}' should follow UPPER_CASE convention", name),
            )
        })
        .collect()
}
