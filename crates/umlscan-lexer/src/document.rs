//! Per-line token cache for a document being edited.

use crate::dialect::DialectConfig;
use crate::scanner::{scan_line, LineTokens};
use crate::state::ScanState;

/// Cached scan results for every line of one document.
///
/// Each document owns its own cache; the dialect configuration is passed in
/// on every call and may be shared between documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedDocument {
    lines: Vec<LineTokens>,
}

impl TokenizedDocument {
    /// Scan `text` from scratch, splitting with `str::lines`.
    pub fn from_text(config: &DialectConfig, text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        Self::from_lines(config, &lines)
    }

    /// Scan an explicit slice of lines.
    pub fn from_lines(config: &DialectConfig, lines: &[&str]) -> Self {
        let mut state = ScanState::new();
        let mut out = Vec::with_capacity(lines.len());
        for line in lines {
            let (tokens, state_after) = scan_line(line, &state, config);
            state = state_after.clone();
            out.push(LineTokens {
                tokens,
                state_after,
            });
        }
        Self { lines: out }
    }

    pub fn lines(&self) -> &[LineTokens] {
        &self.lines
    }

    /// State a line starts in: the previous line's outgoing state.
    pub fn state_before(&self, index: usize) -> ScanState {
        match index.checked_sub(1).and_then(|prev| self.lines.get(prev)) {
            Some(prev) => prev.state_after.clone(),
            None => ScanState::new(),
        }
    }

    /// Outgoing state of the last line when something is still open.
    pub fn unterminated(&self) -> Option<&ScanState> {
        self.lines
            .last()
            .map(|line| &line.state_after)
            .filter(|state| !state.is_normal())
    }

    /// Rescan after `lines[index]` was edited.
    ///
    /// Rescanning continues past the edited line only while lines keep
    /// changing. A change in line count rescans everything.
    pub fn update_line(&mut self, config: &DialectConfig, lines: &[&str], index: usize) {
        if index >= lines.len() {
            return;
        }
        if self.lines.len() != lines.len() {
            tracing::debug!(
                cached = self.lines.len(),
                current = lines.len(),
                "line count changed, rescanning document"
            );
            *self = Self::from_lines(config, lines);
            return;
        }

        let mut state = self.state_before(index);
        for (offset, line) in lines[index..].iter().enumerate() {
            let idx = index + offset;
            let (tokens, state_after) = scan_line(line, &state, config);
            tracing::trace!(line = idx, mode = ?state_after.mode(), "rescanned line");

            let unchanged =
                self.lines[idx].state_after == state_after && self.lines[idx].tokens == tokens;
            state = state_after.clone();
            self.lines[idx] = LineTokens {
                tokens,
                state_after,
            };
            if unchanged {
                break;
            }
        }
    }
}
