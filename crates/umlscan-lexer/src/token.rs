use serde::{Deserialize, Serialize};

/// A column range within a single line, in characters (end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Display category of a lexical span.
///
/// The host's renderer decides how each kind looks; [`TokenKind::style`]
/// gives the conventional editor style name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Comment,
    String,
    Keyword,
    /// Diagram start/end markers and named elements.
    Definition,
    Number,
    /// Arrows, relations and color literals.
    Atom,
    /// Dividers and separators.
    Operator,
    Unstyled,
}

impl TokenKind {
    /// Editor style name for this kind, `None` for unstyled text.
    pub fn style(self) -> Option<&'static str> {
        match self {
            TokenKind::Comment => Some("comment"),
            TokenKind::String => Some("string"),
            TokenKind::Keyword => Some("keyword"),
            TokenKind::Definition => Some("def"),
            TokenKind::Number => Some("number"),
            TokenKind::Atom => Some("atom"),
            TokenKind::Operator => Some("operator"),
            TokenKind::Unstyled => None,
        }
    }
}

/// A classified span of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The text this token covers in `line`.
    pub fn text<'l>(&self, line: &'l str) -> &'l str {
        let start = byte_offset(line, self.span.start);
        let end = byte_offset(line, self.span.end);
        &line[start..end]
    }
}

/// Byte offset of a character column, clamped to the end of `line`.
pub(crate) fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}
