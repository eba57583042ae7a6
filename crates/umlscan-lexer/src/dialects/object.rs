use super::{
    BLOCK_COMMENT, BRACE_CLOSE, BRACE_OPEN, COLOR, DIAGRAM_MARKERS, END_NOTE, LINE_COMMENT, NOTE,
    NUMBER, RELATIONS, STRING_QUOTE, TITLE,
};
use crate::dialect::{DialectConfig, IndentPolicy};
use crate::rules::{Pattern, Rule};
use crate::token::TokenKind;

pub static OBJECT: DialectConfig = DialectConfig {
    name: "plantuml_object",
    label: "PlantUML Diagram (Object)",
    content_id: "text/x-plantuml-object",
    suffixes: &["pobj"],
    line_comment: LINE_COMMENT,
    block_comment: BLOCK_COMMENT,
    string_quote: STRING_QUOTE,
    indent_policy: IndentPolicy::None,
    rules: RULES,
};

const RULES: &[Rule] = &[
    DIAGRAM_MARKERS,
    COLOR,
    END_NOTE,
    BRACE_CLOSE,
    Rule::new(
        Pattern::Keywords(&["object", "map", "as", "skinparam", "hide", "show"]),
        TokenKind::Keyword,
    ),
    TITLE,
    NOTE,
    BRACE_OPEN,
    Rule::new(Pattern::Glyphs(&["=>"]), TokenKind::Atom),
    RELATIONS,
    NUMBER,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan_line;
    use crate::state::{Mode, ScanState};

    #[test]
    fn test_map_entries() {
        let (tokens, state) = scan_line("map CapitalCity {", &ScanState::new(), &OBJECT);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(state.mode(), Mode::InGroup);

        let line = "UK => London";
        let (tokens, state) = scan_line(line, &state, &OBJECT);
        let arrow = tokens.iter().find(|t| t.kind == TokenKind::Atom).unwrap();
        assert_eq!(arrow.text(line), "=>");
        assert_eq!(state.mode(), Mode::InGroup);
    }

    #[test]
    fn test_object_has_no_indent_opinion() {
        let (_, state) = scan_line("object user {", &ScanState::new(), &OBJECT);
        assert_eq!(OBJECT.indent(&state, 4), None);
    }
}
