//! Built-in PlantUML dialects.
//!
//! All dialects share the comment and string syntax and the diagram
//! start/end markers; they differ in keywords, constructs and arrows.

mod class;
mod object;
mod sequence;
mod usecase;

pub use class::CLASS;
pub use object::OBJECT;
pub use sequence::SEQUENCE;
pub use usecase::USECASE;

use crate::dialect::DialectConfig;
use crate::rules::{Pattern, Rule};
use crate::state::Mode;
use crate::token::TokenKind;

/// Every built-in dialect, in registration order.
pub fn builtin() -> [&'static DialectConfig; 4] {
    [&SEQUENCE, &CLASS, &OBJECT, &USECASE]
}

pub(crate) const LINE_COMMENT: &str = "'";
pub(crate) const BLOCK_COMMENT: (&str, &str) = ("/'", "'/");
pub(crate) const STRING_QUOTE: char = '"';

pub(crate) const DIAGRAM_MARKERS: Rule =
    Rule::new(Pattern::Keywords(&["@startuml", "@enduml"]), TokenKind::Definition).to_end();

pub(crate) const COLOR: Rule = Rule::new(Pattern::Color, TokenKind::Atom);

pub(crate) const NUMBER: Rule = Rule::new(Pattern::Number, TokenKind::Number);

pub(crate) const TITLE: Rule =
    Rule::new(Pattern::Keywords(&["title", "header", "footer"]), TokenKind::Keyword).free_text();

pub(crate) const END_NOTE: Rule =
    Rule::new(Pattern::Keywords(&["end note", "endnote"]), TokenKind::Keyword).exit(Mode::InNote);

/// Notes attached to an element side, or floating.
pub(crate) const NOTE: Rule = Rule::new(
    Pattern::Keywords(&[
        "note top of",
        "note bottom of",
        "note left of",
        "note right of",
        "note",
    ]),
    TokenKind::Keyword,
)
.enter(Mode::InNote);

pub(crate) const BRACE_OPEN: Rule =
    Rule::new(Pattern::Literal("{"), TokenKind::Operator).enter(Mode::InGroup);

pub(crate) const BRACE_CLOSE: Rule =
    Rule::new(Pattern::Literal("}"), TokenKind::Operator).exit(Mode::InGroup);

/// Relations shared by the structural diagrams.
pub(crate) const RELATIONS: Rule = Rule::new(
    Pattern::Glyphs(&[
        "<|--", "--|>", "<|..", "..|>", "*--", "--*", "o--", "--o", "-->", "<--", "..>",
        "<..", "->", "<-", "--", "..",
    ]),
    TokenKind::Atom,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ModeEffect;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_are_unique() {
        let names: HashSet<_> = builtin().iter().map(|d| d.name).collect();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_builtin_suffixes_are_unique() {
        let mut seen = HashSet::new();
        for dialect in builtin() {
            for suffix in dialect.suffixes {
                assert!(seen.insert(*suffix), "duplicate suffix {suffix}");
            }
        }
    }

    #[test]
    fn test_every_entered_construct_can_close() {
        for dialect in builtin() {
            for rule in dialect.rules {
                if let ModeEffect::Enter(mode) = rule.effect {
                    assert!(
                        dialect.rules.iter().any(|r| r.closes(mode)),
                        "{} enters {mode:?} without a close rule",
                        dialect.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_markers_come_first() {
        for dialect in builtin() {
            assert_eq!(dialect.rules[0], DIAGRAM_MARKERS, "{}", dialect.name);
        }
    }
}
