//! Rule tables that drive the scanner.
//!
//! A dialect is an ordered list of [`Rule`]s. The scanner tries them in
//! order at each token start and takes the first that matches, so specific
//! literals (diagram markers, multi-character arrows) must come before the
//! generic ones.

use crate::state::Mode;
use crate::token::TokenKind;

/// What a rule recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Exact text.
    Literal(&'static str),
    /// Keyword alternatives. An alternative may span several words, which
    /// match across any run of spaces or tabs. The match must end on a word
    /// boundary; the longest alternative wins.
    Keywords(&'static [&'static str]),
    /// A closed set of ASCII glyph sequences (arrows, relations). Longest wins.
    Glyphs(&'static [&'static str]),
    /// A bracketed literal that must close on the same line.
    Delimited {
        open: &'static str,
        close: &'static str,
    },
    /// Decimal number.
    Number,
    /// Color literal, `#` followed by a name or hex value.
    Color,
}

/// How far a matched rule's token reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// Exactly the matched text.
    Match,
    /// The match plus everything up to the next whitespace.
    ToWhitespace,
    /// The rest of the line.
    ToEnd,
}

/// How a matched rule changes the scan mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEffect {
    None,
    Enter(Mode),
    Exit(Mode),
}

/// One entry of a dialect's rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub pattern: Pattern,
    pub kind: TokenKind,
    pub extent: Extent,
    pub effect: ModeEffect,
    /// After this token the rest of the line is plain text.
    pub free_text: bool,
    /// Matches only when nothing but whitespace or a comment follows.
    pub standalone: bool,
}

impl Rule {
    pub const fn new(pattern: Pattern, kind: TokenKind) -> Self {
        Self {
            pattern,
            kind,
            extent: Extent::Match,
            effect: ModeEffect::None,
            free_text: false,
            standalone: false,
        }
    }

    pub const fn to_whitespace(mut self) -> Self {
        self.extent = Extent::ToWhitespace;
        self
    }

    pub const fn to_end(mut self) -> Self {
        self.extent = Extent::ToEnd;
        self
    }

    pub const fn enter(mut self, mode: Mode) -> Self {
        self.effect = ModeEffect::Enter(mode);
        self
    }

    pub const fn exit(mut self, mode: Mode) -> Self {
        self.effect = ModeEffect::Exit(mode);
        self
    }

    pub const fn free_text(mut self) -> Self {
        self.free_text = true;
        self
    }

    pub const fn standalone(mut self) -> Self {
        self.standalone = true;
        self
    }

    /// Whether this rule closes `mode`.
    pub fn closes(&self, mode: Mode) -> bool {
        self.effect == ModeEffect::Exit(mode)
    }
}

impl Pattern {
    /// Length in bytes of the match at the start of `rest`, if any.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        match *self {
            Pattern::Literal(text) => rest.starts_with(text).then_some(text.len()),
            Pattern::Keywords(alternatives) => alternatives
                .iter()
                .filter_map(|alt| match_phrase(alt, rest))
                .max(),
            Pattern::Glyphs(glyphs) => glyphs
                .iter()
                .filter(|g| rest.starts_with(**g))
                .map(|g| g.len())
                .max(),
            Pattern::Delimited { open, close } => {
                let inner = rest.strip_prefix(open)?;
                if inner.starts_with(char::is_whitespace) {
                    return None;
                }
                let idx = inner.find(close)?;
                (idx > 0).then_some(open.len() + idx + close.len())
            }
            Pattern::Number => match_number(rest),
            Pattern::Color => {
                let mut chars = rest.chars();
                (chars.next() == Some('#') && chars.next().is_some_and(|c| c.is_ascii_alphanumeric()))
                    .then_some(1)
            }
        }
    }

    /// Whether a glyph starting with punctuation matches at `rest`, so it may
    /// split a word, e.g. the `->` in `Alice->Bob`.
    pub(crate) fn starts_mid_word(&self, rest: &str) -> bool {
        match *self {
            Pattern::Glyphs(glyphs) => glyphs.iter().any(|g| {
                g.starts_with(|c: char| !is_word_char(c)) && rest.starts_with(*g)
            }),
            _ => false,
        }
    }
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Match a space-separated phrase against `rest`, allowing any run of
/// spaces or tabs between words.
fn match_phrase(phrase: &str, rest: &str) -> Option<usize> {
    let mut offset = 0;
    for (i, word) in phrase.split(' ').enumerate() {
        if i > 0 {
            let gap = rest[offset..]
                .bytes()
                .take_while(|b| *b == b' ' || *b == b'\t')
                .count();
            if gap == 0 {
                return None;
            }
            offset += gap;
        }
        if !rest[offset..].starts_with(word) {
            return None;
        }
        offset += word.len();
    }

    let ends_in_word = phrase.ends_with(is_word_char);
    let next_is_word = rest[offset..].starts_with(is_word_char);
    if ends_in_word && next_is_word {
        return None;
    }
    Some(offset)
}

fn match_number(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut end = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if end == 0 {
        return None;
    }
    if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
        end += 1;
        end += bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    }
    if rest[end..].starts_with(is_word_char) {
        return None;
    }
    Some(end)
}
