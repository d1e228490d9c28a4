//! Syntax error types
//!
//! [`SyntaxError`] is the diagnostic: error code, message, source range and
//! an optional hint. [`ParseError`] is what `parse` returns; it has a single
//! kind and carries the diagnostic along.

use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorCode;
use super::context::ParseContext;

/// Failure to parse a version string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not match the SemVer 2.0.0 grammar
    #[error("invalid semver string")]
    InvalidFormat(SyntaxError),
}

impl ParseError {
    /// The diagnostic describing where and why the input was rejected
    pub fn syntax_error(&self) -> &SyntaxError {
        match self {
            Self::InvalidFormat(err) => err,
        }
    }

    /// Shorthand for `self.syntax_error().code`
    pub fn code(&self) -> ErrorCode {
        self.syntax_error().code
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        Self::InvalidFormat(err)
    }
}

/// A syntax error with location and context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location (byte offsets into the input)
    pub range: TextRange,
    /// Categorized error code
    pub code: ErrorCode,
    /// Section of the version the error was found in
    pub context: ParseContext,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
}

impl SyntaxError {
    /// Create a builder for more complex error construction
    pub fn builder(code: ErrorCode) -> SyntaxErrorBuilder {
        SyntaxErrorBuilder::new(code)
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Set the context
    pub fn with_context(mut self, context: ParseContext) -> Self {
        self.context = context;
        self
    }

    /// Format the error for display, e.g.
    /// `E0203 (version core error): leading zero ... in version core at 0..2`
    pub fn format(&self) -> String {
        let mut result = format!(
            "{} ({}): {} {} at {}..{}",
            self.code,
            self.code.category_description(),
            self.message,
            self.context.description(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
        );
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}

/// Builder for creating complex syntax errors
pub struct SyntaxErrorBuilder {
    code: ErrorCode,
    message: Option<String>,
    range: Option<TextRange>,
    context: ParseContext,
    hint: Option<String>,
}

impl SyntaxErrorBuilder {
    /// Create a new builder with an error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: None,
            range: None,
            context: ParseContext::default(),
            hint: None,
        }
    }

    /// Set the error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the source range
    pub fn range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the context
    pub fn context(mut self, context: ParseContext) -> Self {
        self.context = context;
        self
    }

    /// Add a hint
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Build the syntax error, falling back to the code's default message
    /// and an empty range at offset 0.
    pub fn build(self) -> SyntaxError {
        SyntaxError {
            message: self
                .message
                .unwrap_or_else(|| self.code.default_message().to_string()),
            range: self
                .range
                .unwrap_or_else(|| TextRange::empty(TextSize::new(0))),
            code: self.code,
            context: self.context,
            hint: self.hint,
        }
    }
}
