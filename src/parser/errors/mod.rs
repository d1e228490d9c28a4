//! Parser error handling module
//!
//! This module provides structured diagnostics for rejected version strings:
//! - Categorized error codes for filtering and documentation
//! - Context-aware error messages (core, pre-release, build)
//! - Hints for common mistakes
//! - The single [`ParseError`] kind returned at the crate boundary

mod codes;
mod context;
mod error;

pub use codes::ErrorCode;
pub use context::ParseContext;
pub use error::{ParseError, SyntaxError, SyntaxErrorBuilder};
