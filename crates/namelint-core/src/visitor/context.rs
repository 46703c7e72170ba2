//! Visitor context providing file information during AST traversal.

use swc_common::Span;

use crate::parser::ParsedFile;

pub struct VisitorContext<'a> {
    file: &'a ParsedFile,
}

impl<'a> VisitorContext<'a> {
    pub fn new(file: &'a ParsedFile) -> Self {
        Self { file }
    }

    pub fn file(&self) -> &ParsedFile {
        self.file
    }

    /// Byte offset of a span position inside the file's source text.
    fn offset(&self, pos: swc_common::BytePos) -> usize {
        pos.0.saturating_sub(self.file.start_pos().0) as usize
    }

    pub fn span_to_location(&self, span: Span) -> (usize, usize) {
        self.position_at(self.offset(span.lo))
    }

    /// Returns `(line, column, end_line, end_column)`, 1-based, end exclusive.
    pub fn span_to_range(&self, span: Span) -> (usize, usize, usize, usize) {
        let (line, column) = self.position_at(self.offset(span.lo));
        let (end_line, end_column) = self.position_at(self.offset(span.hi));
        (line, column, end_line, end_column)
    }

    fn position_at(&self, offset: usize) -> (usize, usize) {
        let source = self.file.source();

        if source.is_empty() || offset == 0 {
            return (1, 1);
        }

        let prefix = &source[..offset.min(source.len())];
        let line = prefix.matches('\n').count() + 1;
        let last_newline = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = prefix.len() - last_newline + 1;

        (line, column)
    }

    pub fn get_source_text(&self, span: Span) -> Option<&str> {
        let source = self.file.source();
        let lo = self.offset(span.lo);
        let hi = self.offset(span.hi);

        if lo <= hi && hi <= source.len() {
            source.get(lo..hi)
        } else {
            None
        }
    }
}
