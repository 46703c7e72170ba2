//! Source parsing
//!
//! Every file is parsed as an ES module with error recovery. Line comments
//! collected by the lexer feed the disable directives, so text inside string
//! literals or JSX is never mistaken for a directive.

use swc_common::comments::{CommentKind, SingleThreadedComments};
use swc_common::sync::Lrc;
use swc_common::{BytePos, FileName, SourceMap, Spanned};
use swc_ecma_ast::{EsVersion, Module};
use swc_ecma_parser::error::Error as SwcError;
use swc_ecma_parser::{EsSyntax, Syntax, TsSyntax, parse_file_as_module};

use crate::disable_comments::DisableDirectives;

/// Grammar a file is parsed with, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `.js`, `.jsx`, `.mjs`, `.cjs` and anything unknown. JSX is always on:
    /// hook code commonly keeps components in plain `.js` files.
    JavaScript,
    /// `.ts`, `.mts`, `.cts`. JSX stays off so `<T>(x) => x` remains a generic arrow.
    TypeScript,
    Tsx,
}

impl Dialect {
    pub fn from_filename(filename: &str) -> Self {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "ts" | "mts" | "cts" => Dialect::TypeScript,
            "tsx" => Dialect::Tsx,
            _ => Dialect::JavaScript,
        }
    }

    fn syntax(self) -> Syntax {
        match self {
            Dialect::JavaScript => Syntax::Es(EsSyntax {
                jsx: true,
                ..Default::default()
            }),
            Dialect::TypeScript => Syntax::Typescript(TsSyntax::default()),
            Dialect::Tsx => Syntax::Typescript(TsSyntax {
                tsx: true,
                ..Default::default()
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {line}:{column}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl ParseError {
    fn from_swc(source_map: &SourceMap, error: &SwcError) -> Self {
        let loc = source_map.lookup_char_pos(error.span().lo);
        Self {
            line: loc.line,
            column: loc.col_display + 1,
            message: error.kind().msg().to_string(),
        }
    }
}

pub struct ParsedFile {
    filename: String,
    dialect: Dialect,
    source: String,
    module: Option<Module>,
    errors: Vec<ParseError>,
    start_pos: BytePos,
    disable_directives: DisableDirectives,
}

impl std::fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedFile")
            .field("filename", &self.filename)
            .field("dialect", &self.dialect)
            .field("has_module", &self.module.is_some())
            .field("errors", &self.errors)
            .finish()
    }
}

impl ParsedFile {
    /// Parses `source`, recovering where the grammar allows. Unrecoverable
    /// errors leave the file without a module; every error is kept.
    pub fn from_source(filename: &str, source: &str) -> Self {
        let dialect = Dialect::from_filename(filename);
        let source_map: Lrc<SourceMap> = Default::default();
        let fm = source_map.new_source_file(
            FileName::Custom(filename.to_string()).into(),
            source.to_string(),
        );
        let comments = SingleThreadedComments::default();
        let mut recovered = Vec::new();

        let result = parse_file_as_module(
            &fm,
            dialect.syntax(),
            EsVersion::latest(),
            Some(&comments),
            &mut recovered,
        );

        let (module, fatal) = match result {
            Ok(module) => (Some(module), None),
            Err(error) => (None, Some(error)),
        };
        let errors: Vec<ParseError> = recovered
            .iter()
            .chain(fatal.as_ref())
            .map(|error| ParseError::from_swc(&source_map, error))
            .collect();

        let disable_directives =
            DisableDirectives::from_line_comments(line_comments(&source_map, comments));

        tracing::trace!(
            file = filename,
            dialect = ?dialect,
            errors = errors.len(),
            "parsed file"
        );

        Self {
            filename: filename.to_string(),
            dialect,
            source: source.to_string(),
            module,
            errors,
            start_pos: fm.start_pos,
            disable_directives,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn module(&self) -> Option<&Module> {
        self.module.as_ref()
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Spans in the module are offset by this position.
    pub fn start_pos(&self) -> BytePos {
        self.start_pos
    }

    pub fn disable_directives(&self) -> &DisableDirectives {
        &self.disable_directives
    }
}

/// `//` comments as (1-based line, text after the slashes).
fn line_comments(
    source_map: &SourceMap,
    comments: SingleThreadedComments,
) -> Vec<(usize, String)> {
    let (leading, trailing) = comments.take_all();
    let leading = leading.borrow();
    let trailing = trailing.borrow();

    leading
        .values()
        .chain(trailing.values())
        .flatten()
        .filter(|comment| matches!(comment.kind, CommentKind::Line))
        .map(|comment| {
            let line = source_map.lookup_char_pos(comment.span.lo).line;
            (line, comment.text.to_string())
        })
        .collect()
}
