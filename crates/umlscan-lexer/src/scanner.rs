use crate::dialect::DialectConfig;
use crate::rules::{Extent, ModeEffect, Pattern, Rule};
use crate::state::{Mode, ScanState};
use crate::token::{Span, Token, TokenKind};

/// Tokens of one line together with the state to hand to the next line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineTokens {
    pub tokens: Vec<Token>,
    pub state_after: ScanState,
}

/// Scan one line starting from `state`.
///
/// Returns the line's tokens and the state for the following line. The
/// scanner never fails: constructs left open simply stay open in the
/// returned state.
pub fn scan_line(
    line: &str,
    state: &ScanState,
    config: &DialectConfig,
) -> (Vec<Token>, ScanState) {
    Scanner::new(line, state, config).run()
}

/// Scan a whole document from the initial state, one entry per line.
pub fn scan_document(text: &str, config: &DialectConfig) -> Vec<LineTokens> {
    let mut state = ScanState::new();
    text.lines()
        .map(|line| {
            let (tokens, state_after) = scan_line(line, &state, config);
            state = state_after.clone();
            LineTokens {
                tokens,
                state_after,
            }
        })
        .collect()
}

/// Single-line scanner.
///
/// Walks the line left to right. Leading indentation is skipped without a
/// token; every later character ends up in exactly one token, with
/// whitespace runs emitted as `Unstyled`.
pub struct Scanner<'a> {
    source: &'a str,
    config: &'a DialectConfig,
    pos: usize,
    column: usize,
    tokens: Vec<Token>,
    state: ScanState,
    /// A note was opened on this line and has not seen its `:` yet.
    note_header: bool,
    /// The open note header contained a complete string.
    note_inline: bool,
    /// The rest of the line is plain text.
    free_text: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, state: &ScanState, config: &'a DialectConfig) -> Self {
        Self {
            source,
            config,
            pos: 0,
            column: 0,
            tokens: Vec::new(),
            state: state.clone(),
            note_header: false,
            note_inline: false,
            free_text: false,
        }
    }

    /// Scan the whole line.
    pub fn run(mut self) -> (Vec<Token>, ScanState) {
        self.skip_indent();
        while !self.is_at_end() {
            self.scan_token();
        }

        self.settle_inline_note();
        (self.tokens, self.state)
    }

    /// Scan the next token.
    fn scan_token(&mut self) {
        let start = self.column;

        if self.free_text {
            self.advance_to_end();
            self.emit(TokenKind::Unstyled, start);
            return;
        }

        if self.peek().is_whitespace() {
            self.advance_while(char::is_whitespace);
            self.emit(TokenKind::Unstyled, start);
            return;
        }

        match self.state.mode() {
            Mode::InBlockComment => return self.continue_block_comment(),
            Mode::InString => return self.continue_string(),
            Mode::InNote if !self.note_header => return self.scan_note_body(),
            _ => {}
        }

        let (block_open, _) = self.config.block_comment;
        if self.at(self.config.line_comment) {
            self.advance_to_end();
            self.emit(TokenKind::Comment, start);
        } else if self.at(block_open) {
            self.open_block_comment();
        } else if self.peek() == self.config.string_quote {
            self.open_string();
        } else if self.note_header && self.peek() == ':' {
            self.close_note_header();
        } else if !self.scan_close() && !self.scan_rule() {
            self.scan_word();
        }
    }

    // --- Continuations ---

    /// Inside a block comment: everything up to and including the close
    /// marker (or the rest of the line) is comment.
    fn continue_block_comment(&mut self) {
        let start = self.column;
        let (_, close) = self.config.block_comment;
        if self.advance_past(close) {
            self.state.exit(Mode::InBlockComment);
        } else {
            self.advance_to_end();
        }
        self.emit(TokenKind::Comment, start);
    }

    fn continue_string(&mut self) {
        let start = self.column;
        if self.advance_past_char(self.config.string_quote) {
            self.state.exit(Mode::InString);
        } else {
            self.advance_to_end();
        }
        self.emit(TokenKind::String, start);
    }

    /// Inside a multi-line note only a close keyword at the start of the
    /// line means anything; the rest is plain text.
    fn scan_note_body(&mut self) {
        if self.tokens.is_empty() && self.scan_close() {
            return;
        }
        let start = self.column;
        self.advance_to_end();
        self.emit(TokenKind::Unstyled, start);
    }

    // --- Openers ---

    fn open_block_comment(&mut self) {
        let start = self.column;
        let (open, close) = self.config.block_comment;
        self.advance_by(open.len());
        if !self.advance_past(close) {
            self.advance_to_end();
            self.settle_inline_note();
            self.state.enter(Mode::InBlockComment);
        }
        self.emit(TokenKind::Comment, start);
    }

    fn open_string(&mut self) {
        let start = self.column;
        let quote = self.config.string_quote;
        self.advance();
        if self.advance_past_char(quote) {
            if self.note_header {
                self.note_inline = true;
            }
        } else {
            self.advance_to_end();
            self.settle_inline_note();
            self.state.enter(Mode::InString);
        }
        self.emit(TokenKind::String, start);
    }

    /// `note "text" as N` is complete on its own line. Its frame is popped
    /// before anything else opens on top of it.
    fn settle_inline_note(&mut self) {
        if self.note_header && self.note_inline {
            self.state.exit(Mode::InNote);
            self.note_header = false;
            self.note_inline = false;
        }
    }

    /// `note over Bob: text` closes itself at the colon.
    fn close_note_header(&mut self) {
        let start = self.column;
        self.advance();
        self.emit(TokenKind::Operator, start);
        self.state.exit(Mode::InNote);
        self.note_header = false;
        self.free_text = true;
    }

    // --- Rules ---

    /// Try the close rules. The longest close keyword at the cursor wins; it
    /// closes the innermost construct only if it belongs to it, otherwise it
    /// is consumed as plain text.
    fn scan_close(&mut self) -> bool {
        let rest = self.rest();
        let mut best: Option<(&Rule, usize)> = None;
        for rule in self.config.rules {
            if !matches!(rule.effect, ModeEffect::Exit(_)) {
                continue;
            }
            let Some(len) = rule.pattern.match_len(rest).filter(|len| *len > 0) else {
                continue;
            };
            if rule.standalone && !self.only_trivia_after(len) {
                continue;
            }
            if best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((rule, len));
            }
        }
        let Some((rule, len)) = best else {
            return false;
        };

        let start = self.column;
        self.advance_by(len);
        let closed = match rule.effect {
            ModeEffect::Exit(mode) => self.state.exit(mode),
            _ => false,
        };
        if closed {
            if rule.closes(Mode::InNote) {
                self.note_header = false;
            }
            self.emit(rule.kind, start);
        } else {
            self.emit(TokenKind::Unstyled, start);
        }
        true
    }

    /// Try the dialect's rules in table order; the first match wins.
    fn scan_rule(&mut self) -> bool {
        let rest = self.rest();
        let matched = self.config.rules.iter().find_map(|rule| {
            let skip = match rule.effect {
                ModeEffect::Exit(_) => true,
                // No constructs open inside a note header.
                ModeEffect::Enter(_) => self.note_header,
                ModeEffect::None => false,
            };
            if skip {
                return None;
            }
            let len = rule.pattern.match_len(rest).filter(|len| *len > 0)?;
            if matches!(rule.effect, ModeEffect::Enter(_))
                && matches!(rule.pattern, Pattern::Keywords(_))
                && !self.opens_construct(&rest[len..])
            {
                return None;
            }
            Some((rule, len))
        });
        let Some((rule, len)) = matched else {
            return false;
        };

        let start = self.column;
        if rule.pattern == Pattern::Color {
            self.scan_color();
        } else {
            self.advance_by(len);
        }
        match rule.extent {
            Extent::Match => {}
            Extent::ToWhitespace => self.advance_while(|c| !c.is_whitespace()),
            Extent::ToEnd => self.advance_to_end(),
        }
        self.emit(rule.kind, start);

        if let ModeEffect::Enter(mode) = rule.effect {
            self.state.enter(mode);
            if mode == Mode::InNote {
                self.note_header = true;
                self.note_inline = false;
            }
        }
        if rule.free_text {
            self.free_text = true;
        }
        true
    }

    /// Consume a color literal such as `#LightBlue` or `#red/blue`.
    fn scan_color(&mut self) {
        self.state.enter(Mode::InColor);
        self.advance(); // consume `#`
        while self.state.mode() == Mode::InColor {
            let c = self.peek();
            let gradient = matches!(c, '/' | '\\' | '|' | '-') && self.peek_next().is_ascii_alphanumeric();
            if c.is_ascii_alphanumeric() || gradient {
                self.advance();
            } else {
                self.state.exit(Mode::InColor);
            }
        }
    }

    /// Unrecognized text runs to the next whitespace, or up to a glyph that
    /// can start mid-word (`Alice->Bob`).
    fn scan_word(&mut self) {
        let start = self.column;
        self.advance();
        while !self.is_at_end() && !self.peek().is_whitespace() && !self.at_word_break() {
            self.advance();
        }
        self.emit(TokenKind::Unstyled, start);
    }

    fn at_word_break(&self) -> bool {
        if self.note_header && self.peek() == ':' {
            return true;
        }
        let rest = self.rest();
        self.config
            .rules
            .iter()
            .any(|rule| rule.pattern.starts_mid_word(rest))
    }

    // --- Helpers ---

    /// Construct keywords open only as the first token of a line, followed
    /// by a separator: `participant box` and `box->Bob` open nothing.
    fn opens_construct(&self, tail: &str) -> bool {
        let separated = match tail.chars().next() {
            None => true,
            Some(c) => c.is_whitespace() || matches!(c, ':' | '"' | '#'),
        };
        self.tokens.is_empty() && separated
    }

    /// Whether only whitespace or a comment follows the next `len` bytes.
    fn only_trivia_after(&self, len: usize) -> bool {
        let tail = self.rest()[len..].trim_start();
        let (block_open, _) = self.config.block_comment;
        tail.is_empty()
            || (!self.config.line_comment.is_empty() && tail.starts_with(self.config.line_comment))
            || (!block_open.is_empty() && tail.starts_with(block_open))
    }

    fn emit(&mut self, kind: TokenKind, start: usize) {
        if self.column > start {
            self.tokens.push(Token::new(kind, Span::new(start, self.column)));
        }
    }

    fn skip_indent(&mut self) {
        self.advance_while(char::is_whitespace);
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn at(&self, marker: &str) -> bool {
        !marker.is_empty() && self.rest().starts_with(marker)
    }

    fn peek(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.rest().chars().nth(1).unwrap_or('\0')
    }

    fn advance(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.pos += c.len_utf8();
            self.column += 1;
        }
    }

    /// Advance over `len` bytes of the remaining text.
    fn advance_by(&mut self, len: usize) {
        let end = (self.pos + len).min(self.source.len());
        self.column += self.source[self.pos..end].chars().count();
        self.pos = end;
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_at_end() && pred(self.peek()) {
            self.advance();
        }
    }

    fn advance_to_end(&mut self) {
        self.advance_by(self.source.len() - self.pos);
    }

    /// Advance past the next occurrence of `marker`. Returns whether found.
    fn advance_past(&mut self, marker: &str) -> bool {
        match self.rest().find(marker) {
            Some(idx) if !marker.is_empty() => {
                self.advance_by(idx + marker.len());
                true
            }
            _ => false,
        }
    }

    fn advance_past_char(&mut self, c: char) -> bool {
        match self.rest().find(c) {
            Some(idx) => {
                self.advance_by(idx + c.len_utf8());
                true
            }
            None => false,
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}
