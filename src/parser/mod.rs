//! Parser for SemVer 2.0.0 version strings
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → Version, or the first SyntaxError
//! ```
//!
//! The grammar is recognised by an explicit recursive-descent parser rather
//! than a compiled pattern, so the parser holds no global state and runs in
//! time linear in the input.

#[allow(clippy::module_inception)]
mod parser;

pub mod errors;
mod lexer;
mod syntax_kind;

pub use errors::{ErrorCode, ParseContext, ParseError, SyntaxError};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{is_valid, parse, parse_all};
pub use syntax_kind::SyntaxKind;

/// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
