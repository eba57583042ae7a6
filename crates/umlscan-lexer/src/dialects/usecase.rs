use super::{
    BLOCK_COMMENT, BRACE_CLOSE, BRACE_OPEN, COLOR, DIAGRAM_MARKERS, END_NOTE, LINE_COMMENT, NOTE,
    STRING_QUOTE, TITLE,
};
use crate::dialect::{DialectConfig, IndentPolicy};
use crate::rules::{Pattern, Rule};
use crate::token::TokenKind;

pub static USECASE: DialectConfig = DialectConfig {
    name: "plantuml_usecase",
    label: "PlantUML Diagram (Use Case)",
    content_id: "text/x-plantuml-usecase",
    suffixes: &["pusecase", "puse"],
    line_comment: LINE_COMMENT,
    block_comment: BLOCK_COMMENT,
    string_quote: STRING_QUOTE,
    indent_policy: IndentPolicy::Constructs,
    rules: RULES,
};

const RULES: &[Rule] = &[
    DIAGRAM_MARKERS,
    COLOR,
    END_NOTE,
    BRACE_CLOSE,
    Rule::new(
        Pattern::Keywords(&[
            "left to right direction",
            "top to bottom direction",
            "actor",
            "usecase",
            "rectangle",
            "package",
            "as",
            "skinparam",
        ]),
        TokenKind::Keyword,
    ),
    TITLE,
    // `(Use case)` and `:Actor:` shorthands.
    Rule::new(Pattern::Delimited { open: "(", close: ")" }, TokenKind::Definition),
    Rule::new(Pattern::Delimited { open: ":", close: ":" }, TokenKind::Definition),
    NOTE,
    BRACE_OPEN,
    Rule::new(
        Pattern::Glyphs(&[
            "-up->", "-down->", "-left->", "-right->", "-u->", "-d->", "-l->", "-r->", "<|--",
            "--|>", "-->", "->", "<--", "<-", "..>", "<..", "--", "..",
        ]),
        TokenKind::Atom,
    ),
    Rule::new(Pattern::Glyphs(&[":"]), TokenKind::Operator).free_text(),
];
