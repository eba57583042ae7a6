use super::{
    BLOCK_COMMENT, BRACE_CLOSE, BRACE_OPEN, COLOR, DIAGRAM_MARKERS, END_NOTE, LINE_COMMENT, NOTE,
    NUMBER, RELATIONS, STRING_QUOTE, TITLE,
};
use crate::dialect::{DialectConfig, IndentPolicy};
use crate::rules::{Pattern, Rule};
use crate::token::TokenKind;

pub static CLASS: DialectConfig = DialectConfig {
    name: "plantuml_class",
    label: "PlantUML Diagram (Class)",
    content_id: "text/x-plantuml-class",
    suffixes: &["pclass"],
    line_comment: LINE_COMMENT,
    block_comment: BLOCK_COMMENT,
    string_quote: STRING_QUOTE,
    indent_policy: IndentPolicy::Nesting,
    rules: RULES,
};

const RULES: &[Rule] = &[
    DIAGRAM_MARKERS,
    COLOR,
    END_NOTE,
    BRACE_CLOSE,
    // Member modifiers may be glued to the member name.
    Rule::new(
        Pattern::Keywords(&["{static}", "{abstract}", "{field}", "{method}"]),
        TokenKind::Keyword,
    )
    .to_whitespace(),
    Rule::new(
        Pattern::Keywords(&[
            "abstract class",
            "abstract",
            "class",
            "interface",
            "annotation",
            "enum",
            "package",
            "namespace",
            "extends",
            "implements",
            "as",
            "hide",
            "show",
            "skinparam",
        ]),
        TokenKind::Keyword,
    ),
    TITLE,
    NOTE,
    BRACE_OPEN,
    RELATIONS,
    NUMBER,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan_line;
    use crate::state::{Mode, ScanState};
    use pretty_assertions::assert_eq;

    fn pieces(line: &str, state: &ScanState) -> (Vec<(TokenKind, String)>, ScanState) {
        let (tokens, next) = scan_line(line, state, &CLASS);
        let pieces = tokens
            .iter()
            .filter(|t| !t.text(line).trim().is_empty())
            .map(|t| (t.kind, t.text(line).to_string()))
            .collect();
        (pieces, next)
    }

    #[test]
    fn test_abstract_class_is_one_keyword() {
        let (p, _) = pieces("abstract class Shape", &ScanState::new());
        assert_eq!(
            p,
            vec![
                (TokenKind::Keyword, "abstract class".into()),
                (TokenKind::Unstyled, "Shape".into()),
            ]
        );
    }

    #[test]
    fn test_class_prefix_is_not_keyword() {
        let (p, _) = pieces("classroom", &ScanState::new());
        assert_eq!(p, vec![(TokenKind::Unstyled, "classroom".into())]);
    }

    #[test]
    fn test_static_modifier_extends_to_whitespace() {
        let (p, _) = pieces("{static}counter int", &ScanState::new());
        assert_eq!(
            p,
            vec![
                (TokenKind::Keyword, "{static}counter".into()),
                (TokenKind::Unstyled, "int".into()),
            ]
        );
    }

    #[test]
    fn test_class_body_nests() {
        let (p, state) = pieces("class Car {", &ScanState::new());
        assert_eq!(p[2], (TokenKind::Operator, "{".into()));
        assert_eq!(state.mode(), Mode::InGroup);
        assert_eq!(CLASS.indent(&state, 4), Some(4));

        let (_, state) = pieces("  String model", &state);
        assert_eq!(state.mode(), Mode::InGroup);

        let (p, state) = pieces("}", &state);
        assert_eq!(p, vec![(TokenKind::Operator, "}".into())]);
        assert!(state.is_normal());
    }

    #[test]
    fn test_relation_glyphs() {
        let (p, _) = pieces("Animal <|-- Dog", &ScanState::new());
        assert_eq!(p[1], (TokenKind::Atom, "<|--".into()));
        let (p, _) = pieces("Car *-- Wheel", &ScanState::new());
        assert_eq!(p[1], (TokenKind::Atom, "*--".into()));
    }

    #[test]
    fn test_note_side_with_inline_text() {
        let (p, state) = pieces("note left of Car : fast", &ScanState::new());
        assert_eq!(p[0], (TokenKind::Keyword, "note left of".into()));
        assert_eq!(p[2], (TokenKind::Operator, ":".into()));
        assert!(state.is_normal());
    }

    #[test]
    fn test_floating_note_with_string_is_single_line() {
        let (p, state) = pieces("note \"Shared\" as N1", &ScanState::new());
        assert_eq!(p[1], (TokenKind::String, "\"Shared\"".into()));
        assert!(state.is_normal());
    }

    #[test]
    fn test_stray_brace_is_text() {
        let (p, state) = pieces("}", &ScanState::new());
        assert_eq!(p, vec![(TokenKind::Unstyled, "}".into())]);
        assert!(state.is_normal());
    }
}
