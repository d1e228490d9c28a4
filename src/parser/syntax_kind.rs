//! Token kinds produced by the lexer
//!
//! The SemVer grammar needs only five terminals. Hyphens are kept apart from
//! letters so the parser can tell the pre-release separator from an
//! identifier character by position alone.

/// All token kinds in a version string
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    DIGITS = 0, // 0123
    LETTERS,    // alpha
    HYPHEN,     // -
    DOT,        // .
    PLUS,       // +

    /// Anything outside `[0-9A-Za-z.+-]`
    ERROR,
}

impl SyntaxKind {
    /// Tokens that may appear inside a pre-release or build identifier
    pub fn is_identifier_part(self) -> bool {
        matches!(self, Self::DIGITS | Self::LETTERS | Self::HYPHEN)
    }

    /// Short description for error messages
    pub fn describe(self) -> &'static str {
        match self {
            Self::DIGITS => "digits",
            Self::LETTERS => "letters",
            Self::HYPHEN => "'-'",
            Self::DOT => "'.'",
            Self::PLUS => "'+'",
            Self::ERROR => "invalid character",
        }
    }
}
