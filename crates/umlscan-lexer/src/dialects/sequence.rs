use super::{
    BLOCK_COMMENT, COLOR, DIAGRAM_MARKERS, LINE_COMMENT, NUMBER, STRING_QUOTE, TITLE,
};
use crate::dialect::{DialectConfig, IndentPolicy};
use crate::rules::{Pattern, Rule};
use crate::state::Mode;
use crate::token::TokenKind;

pub static SEQUENCE: DialectConfig = DialectConfig {
    name: "plantuml_sequence",
    label: "PlantUML Diagram (Sequence)",
    content_id: "text/x-plantuml-sequence",
    suffixes: &["psequence", "pseq"],
    line_comment: LINE_COMMENT,
    block_comment: BLOCK_COMMENT,
    string_quote: STRING_QUOTE,
    indent_policy: IndentPolicy::Constructs,
    rules: RULES,
};

const RULES: &[Rule] = &[
    DIAGRAM_MARKERS,
    // Dividers, delays and spacers run to the end of the line.
    Rule::new(Pattern::Literal("=="), TokenKind::Operator).to_end(),
    Rule::new(Pattern::Literal("..."), TokenKind::Operator).to_end(),
    Rule::new(Pattern::Literal("|||"), TokenKind::Operator).to_end(),
    COLOR,
    Rule::new(
        Pattern::Keywords(&[
            "end note",
            "endnote",
            "end hnote",
            "endhnote",
            "end rnote",
            "endrnote",
        ]),
        TokenKind::Keyword,
    )
    .exit(Mode::InNote),
    Rule::new(Pattern::Keywords(&["end box"]), TokenKind::Keyword).exit(Mode::InBox),
    Rule::new(Pattern::Keywords(&["end"]), TokenKind::Keyword)
        .exit(Mode::InGroup)
        .standalone(),
    Rule::new(Pattern::Keywords(&["end ref"]), TokenKind::Keyword),
    Rule::new(
        Pattern::Keywords(&[
            "actor",
            "participant",
            "boundary",
            "control",
            "entity",
            "database",
            "collections",
            "queue",
            "as",
            "order",
            "create",
            "activate",
            "deactivate",
            "destroy",
            "autoactivate",
            "autonumber",
            "skinparam",
            "hide",
            "show",
            "ref over",
        ]),
        TokenKind::Keyword,
    ),
    TITLE,
    Rule::new(Pattern::Keywords(&["return", "newpage"]), TokenKind::Keyword).free_text(),
    Rule::new(Pattern::Keywords(&["else"]), TokenKind::Keyword).free_text(),
    Rule::new(
        Pattern::Keywords(&[
            "alt", "opt", "loop", "par", "break", "critical", "group",
        ]),
        TokenKind::Keyword,
    )
    .enter(Mode::InGroup)
    .free_text(),
    Rule::new(Pattern::Keywords(&["box"]), TokenKind::Keyword).enter(Mode::InBox),
    Rule::new(
        Pattern::Keywords(&[
            "note left of",
            "note right of",
            "note over",
            "note across",
            "note left",
            "note right",
            "note",
            "hnote over",
            "hnote",
            "rnote over",
            "rnote",
        ]),
        TokenKind::Keyword,
    )
    .enter(Mode::InNote),
    Rule::new(
        Pattern::Glyphs(&[
            "<->", "<-->", "->>", "-->>", "->", "-->", "<-", "<--", "<<-", "<<--", "->x", "-->x",
            "x->", "x-->", "->o", "-->o", "o->", "o-->", "-\\", "-\\\\", "-/", "-//", "--\\",
            "--/", "?->", "->?", "[->", "->]", "[-->", "-->]",
        ]),
        TokenKind::Atom,
    ),
    Rule::new(Pattern::Glyphs(&[":"]), TokenKind::Operator).free_text(),
    NUMBER,
];
