//! Indent width from scan state.

use crate::state::{Mode, ScanState};

/// Indent width for the line after `state`.
///
/// Only an open box or note indents; any other state returns `None` so the
/// host falls back to its own indentation.
pub fn indent_width(state: &ScanState, unit: u32) -> Option<u32> {
    match state.mode() {
        Mode::InBox | Mode::InNote => Some(depth_width(state, unit)),
        _ => None,
    }
}

pub(crate) fn depth_width(state: &ScanState, unit: u32) -> u32 {
    let depth = u32::try_from(state.indent_depth()).unwrap_or(u32::MAX);
    depth.saturating_mul(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_has_no_opinion() {
        assert_eq!(indent_width(&ScanState::new(), 4), None);
    }

    #[test]
    fn test_box_indents_by_depth() {
        let mut state = ScanState::new();
        state.enter(Mode::InBox);
        assert_eq!(indent_width(&state, 4), Some(4));
        state.enter(Mode::InNote);
        assert_eq!(indent_width(&state, 4), Some(8));
    }

    #[test]
    fn test_group_and_comment_have_no_opinion() {
        let mut state = ScanState::new();
        state.enter(Mode::InGroup);
        assert_eq!(indent_width(&state, 4), None);
        state.enter(Mode::InBlockComment);
        assert_eq!(indent_width(&state, 4), None);
    }

    #[test]
    fn test_note_in_group_counts_group_depth() {
        let mut state = ScanState::new();
        state.enter(Mode::InGroup);
        state.enter(Mode::InNote);
        assert_eq!(indent_width(&state, 2), Some(4));
    }
}
