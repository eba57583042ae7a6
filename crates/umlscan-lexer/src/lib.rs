//! PlantUML dialect scanner
//!
//! Tokenizes PlantUML diagram source one line at a time for syntax
//! highlighting and auto-indentation. Each call takes the state left by the
//! previous line and returns the state for the next, so an editor can rescan
//! a single changed line without touching the rest of the buffer.
//!
//! # Example
//!
//! ```
//! use umlscan_lexer::{scan_line, DialectRegistry, ScanState, TokenKind};
//!
//! let registry = DialectRegistry::with_builtins();
//! let dialect = registry.lookup("pseq").unwrap();
//!
//! let (tokens, state) = scan_line("actor Bob", &ScanState::new(), dialect);
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert!(state.is_normal());
//! ```

pub mod dialect;
pub mod dialects;
pub mod document;
pub mod indent;
pub mod registry;
pub mod rules;
pub mod scanner;
pub mod state;
pub mod token;

pub use dialect::{DialectConfig, IndentPolicy, Registration};
pub use document::TokenizedDocument;
pub use indent::indent_width;
pub use registry::DialectRegistry;
pub use scanner::{scan_document, scan_line, LineTokens, Scanner};
pub use state::{Mode, ScanState};
pub use token::{Span, Token, TokenKind};

/// No dialect is registered under the requested key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized dialect: '{key}'")]
pub struct LookupError {
    pub key: String,
}
