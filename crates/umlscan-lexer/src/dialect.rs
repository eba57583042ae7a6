use serde::Serialize;

use crate::indent;
use crate::rules::Rule;
use crate::state::ScanState;

/// How a dialect derives an indent width from the scan state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentPolicy {
    /// Never has an opinion; the host keeps its own indentation.
    None,
    /// Only open boxes and notes indent the next line.
    Constructs,
    /// Every open nesting construct indents the next line.
    Nesting,
}

/// Everything the scanner needs to know about one dialect.
///
/// Instances are plain `'static` data, built once and shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectConfig {
    /// Registry key, e.g. `plantuml_sequence`.
    pub name: &'static str,
    /// Human-readable name shown by the host.
    pub label: &'static str,
    /// MIME-style content identifier.
    pub content_id: &'static str,
    /// File suffixes without the leading dot.
    pub suffixes: &'static [&'static str],
    pub line_comment: &'static str,
    pub block_comment: (&'static str, &'static str),
    pub string_quote: char,
    pub indent_policy: IndentPolicy,
    /// Ordered rule table, tried after comments and strings.
    pub rules: &'static [Rule],
}

impl DialectConfig {
    /// Indent width for the line following `state`, or `None` for no opinion.
    pub fn indent(&self, state: &ScanState, unit: u32) -> Option<u32> {
        match self.indent_policy {
            IndentPolicy::None => None,
            IndentPolicy::Constructs => indent::indent_width(state, unit),
            IndentPolicy::Nesting => Some(indent::depth_width(state, unit)),
        }
    }

    /// The tuple a host's language registry needs to route files here.
    pub fn registration(&self) -> Registration {
        Registration {
            name: self.name,
            label: self.label,
            content_id: self.content_id,
            suffixes: self.suffixes,
            line_comment: self.line_comment,
            block_comment_open: self.block_comment.0,
            block_comment_close: self.block_comment.1,
        }
    }
}

/// Host-facing registration record for a dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: &'static str,
    pub label: &'static str,
    pub content_id: &'static str,
    pub suffixes: &'static [&'static str],
    pub line_comment: &'static str,
    pub block_comment_open: &'static str,
    pub block_comment_close: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects;
    use crate::state::Mode;

    fn state_with(frames: &[Mode]) -> ScanState {
        let mut state = ScanState::new();
        for mode in frames {
            state.enter(*mode);
        }
        state
    }

    #[test]
    fn test_registration_mirrors_config() {
        let reg = dialects::CLASS.registration();
        assert_eq!(reg.name, "plantuml_class");
        assert_eq!(reg.content_id, "text/x-plantuml-class");
        assert_eq!(reg.suffixes, &["pclass"]);
        assert_eq!(reg.line_comment, "'");
        assert_eq!(reg.block_comment_open, "/'");
        assert_eq!(reg.block_comment_close, "'/");
    }

    #[test]
    fn test_indent_policy_none() {
        let state = state_with(&[Mode::InGroup]);
        assert_eq!(dialects::OBJECT.indent(&state, 4), None);
    }

    #[test]
    fn test_indent_policy_constructs_ignores_groups() {
        let state = state_with(&[Mode::InGroup]);
        assert_eq!(dialects::SEQUENCE.indent(&state, 4), None);
        let state = state_with(&[Mode::InBox]);
        assert_eq!(dialects::SEQUENCE.indent(&state, 4), Some(4));
    }

    #[test]
    fn test_indent_policy_nesting_counts_everything() {
        let state = state_with(&[Mode::InGroup, Mode::InBlockComment]);
        assert_eq!(dialects::CLASS.indent(&state, 2), Some(4));
        assert_eq!(dialects::CLASS.indent(&ScanState::new(), 2), Some(0));
    }
}
