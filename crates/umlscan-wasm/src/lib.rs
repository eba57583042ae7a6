//! WASM bindings for the PlantUML dialect scanner.
//!
//! Exposes a `Highlighter` to a JavaScript editor host. Line state crosses
//! the boundary as a plain JS object the host stores next to each line;
//! token columns are UTF-16 offsets, as JS strings expect.

use serde::Serialize;
use umlscan_lexer::{DialectRegistry, LookupError, Registration, ScanState, Token, TokenKind};
use wasm_bindgen::prelude::*;

/// A token as the host sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostToken {
    pub kind: TokenKind,
    /// Editor style name, `null` for unstyled text.
    pub style: Option<&'static str>,
    pub start: usize,
    pub end: usize,
}

/// Result of scanning one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostLine {
    pub tokens: Vec<HostToken>,
    pub state: ScanState,
}

/// Scanner front end owned by the host for the lifetime of the editor.
#[wasm_bindgen]
pub struct Highlighter {
    registry: DialectRegistry,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Highlighter {
    /// Create a highlighter with every built-in dialect registered.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Highlighter {
        Highlighter {
            registry: DialectRegistry::with_builtins(),
        }
    }

    /// Dialect name for a file suffix or content id, `undefined` when the
    /// host should fall back to plain text.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.registry.lookup(key).ok().map(|d| d.name.to_string())
    }

    /// Registration records for the host's language registry.
    pub fn dialects(&self) -> Result<JsValue, JsError> {
        to_js(&self.registrations())
    }

    /// State for the first line of a document.
    #[wasm_bindgen(js_name = startState)]
    pub fn start_state(&self) -> Result<JsValue, JsError> {
        to_js(&ScanState::new())
    }

    /// Scan `line` in `dialect`, starting from the previous line's state.
    /// Returns `{ tokens, state }`.
    #[wasm_bindgen(js_name = scanLine)]
    pub fn scan_line_js(&self, dialect: &str, line: &str, state: JsValue) -> Result<JsValue, JsError> {
        let state = from_js(state)?;
        let result = self
            .scan(dialect, line, &state)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&result)
    }

    /// Indent width for the line after `state`, `undefined` for no opinion.
    pub fn indent(&self, dialect: &str, state: JsValue, unit: u32) -> Result<Option<u32>, JsError> {
        let state = from_js(state)?;
        self.indent_for(dialect, &state, unit)
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

impl Highlighter {
    /// Scan one line, converting columns to UTF-16 offsets.
    pub fn scan(&self, dialect: &str, line: &str, state: &ScanState) -> Result<HostLine, LookupError> {
        let config = self.registry.lookup(dialect)?;
        let (tokens, state) = umlscan_lexer::scan_line(line, state, config);
        Ok(HostLine {
            tokens: to_host_tokens(line, &tokens),
            state,
        })
    }

    pub fn indent_for(
        &self,
        dialect: &str,
        state: &ScanState,
        unit: u32,
    ) -> Result<Option<u32>, LookupError> {
        Ok(self.registry.lookup(dialect)?.indent(state, unit))
    }

    pub fn registrations(&self) -> Vec<Registration> {
        self.registry.iter().map(|d| d.registration()).collect()
    }
}

/// Get the scanner version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_host_tokens(line: &str, tokens: &[Token]) -> Vec<HostToken> {
    // UTF-16 offset of every character column, plus the end of the line.
    let mut offsets = Vec::with_capacity(line.len() + 1);
    let mut utf16 = 0;
    offsets.push(0);
    for c in line.chars() {
        utf16 += c.len_utf16();
        offsets.push(utf16);
    }

    tokens
        .iter()
        .map(|t| HostToken {
            kind: t.kind,
            style: t.kind.style(),
            start: offsets[t.span.start],
            end: offsets[t.span.end],
        })
        .collect()
}

/// Missing state (`undefined`/`null`) means the start of the document.
fn from_js(value: JsValue) -> Result<ScanState, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(ScanState::new());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}
