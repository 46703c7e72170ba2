//! svg-file-name rule (N003): SVG imports are bound to `...Icon` names

use std::ops::ControlFlow;
use std::sync::LazyLock;

use regex::Regex;
use swc_ecma_ast::{ImportDecl, ImportSpecifier};

use crate::declare_rule;
use crate::diagnostic::{Diagnostic, Violation};
use crate::parser::ParsedFile;
use crate::rules::{Rule, RuleMetadata};
use crate::visitor::{AstVisitor, VisitorContext, walk_ast};

pub const MESSAGE: &str = "icons must end with word 'Icon'";

static ICON_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"w*Icon\b").expect("Invalid regex pattern"));

declare_rule!(
    SvgFileName,
    id = "N003",
    name = "svg-file-name",
    description = "Require imported SVG icons to be named with an 'Icon' suffix",
    category = Naming,
    severity = Warning,
    examples = "// Bad\nimport Logo from './logo.svg';\n\n// Good\nimport LogoIcon from './logo.svg';"
);

impl Rule for SvgFileName {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, file: &ParsedFile) -> Vec<Diagnostic> {
        let Some(module) = file.module() else {
            return Vec::new();
        };

        let ctx = VisitorContext::new(file);
        let mut visitor = SvgFileNameVisitor {
            diagnostics: Vec::new(),
            metadata: &self.metadata,
            file_path: file.filename().to_string(),
        };

        walk_ast(module, &mut visitor, &ctx);
        visitor.diagnostics
    }
}

/// Flags an `.svg` import whose first local binding does not carry the word `Icon`.
///
/// Only the first specifier is inspected.
pub fn check_svg_import(import: &ImportDecl) -> Option<Violation> {
    if !import.src.value.to_string().contains(".svg") {
        return None;
    }

    let local = match import.specifiers.first()? {
        ImportSpecifier::Default(spec) => &spec.local,
        ImportSpecifier::Named(spec) => &spec.local,
        ImportSpecifier::Namespace(spec) => &spec.local,
    };
    if ICON_NAME.is_match(local.sym.as_ref()) {
        return None;
    }

    Some(Violation::new(import.span, MESSAGE))
}

struct SvgFileNameVisitor<'m> {
    diagnostics: Vec<Diagnostic>,
    metadata: &'m RuleMetadata,
    file_path: String,
}

impl AstVisitor for SvgFileNameVisitor<'_> {
    fn visit_import_decl(&mut self, node: &ImportDecl, ctx: &VisitorContext) -> ControlFlow<()> {
        if let Some(violation) = check_svg_import(node) {
            self.diagnostics
                .push(violation.into_diagnostic(self.metadata, &self.file_path, ctx));
        }
        ControlFlow::Continue(())
    }
}
