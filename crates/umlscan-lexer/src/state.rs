use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The innermost construct a line is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Normal,
    InBlockComment,
    InString,
    InNote,
    InBox,
    InGroup,
    /// Only held while a color literal is being consumed.
    InColor,
}

impl Mode {
    /// Whether this mode is a nesting construct that counts toward indentation.
    pub fn is_nesting(self) -> bool {
        matches!(
            self,
            Mode::InBlockComment | Mode::InNote | Mode::InBox | Mode::InGroup
        )
    }
}

/// Scanner state carried from the end of one line to the start of the next.
///
/// Open modes are kept as a stack (innermost last), so closing a construct
/// always restores exactly the enclosing one. Typical nesting fits inline
/// without touching the heap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScanState {
    frames: SmallVec<[Mode; 4]>,
}

impl ScanState {
    /// State at the start of a document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Innermost open mode, `Normal` when nothing is open.
    pub fn mode(&self) -> Mode {
        self.frames.last().copied().unwrap_or(Mode::Normal)
    }

    /// Number of open nesting constructs (comments, notes, boxes, groups).
    pub fn indent_depth(&self) -> usize {
        self.frames.iter().filter(|m| m.is_nesting()).count()
    }

    pub fn is_normal(&self) -> bool {
        self.frames.is_empty()
    }

    /// Open modes, outermost first.
    pub fn frames(&self) -> &[Mode] {
        &self.frames
    }

    pub(crate) fn enter(&mut self, mode: Mode) {
        if mode != Mode::Normal {
            self.frames.push(mode);
        }
    }

    /// Close `mode` if it is the innermost frame. Returns whether it closed.
    pub(crate) fn exit(&mut self, mode: Mode) -> bool {
        if self.mode() == mode && !self.frames.is_empty() {
            self.frames.pop();
            true
        } else {
            false
        }
    }
}
