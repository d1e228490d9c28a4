//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (characters outside the grammar)
//! - E02xx: Version core errors
//! - E03xx: Pre-release errors
//! - E04xx: Build metadata errors
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for parser diagnostics
///
/// Each code names one way a string can fail the SemVer grammar. All of them
/// surface as [`ParseError::InvalidFormat`](super::ParseError::InvalidFormat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Character that cannot appear anywhere in a version
    E0101,

    // =========================================================================
    // E02xx: Version core errors
    // =========================================================================
    /// Empty input
    E0201,
    /// Missing numeric core field
    E0202,
    /// Leading zero in a core field
    E0203,
    /// Missing `.` between core fields
    E0204,

    // =========================================================================
    // E03xx: Pre-release errors
    // =========================================================================
    /// Empty pre-release identifier
    E0301,
    /// Leading zero in a numeric pre-release identifier
    E0302,

    // =========================================================================
    // E04xx: Build metadata errors
    // =========================================================================
    /// Empty build identifier
    E0401,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Input continues after a complete version
    E0901,
    /// Input longer than a byte offset can address
    E0902,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0401 => "E0401",
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 => "version core error",
            Self::E0301 | Self::E0302 => "pre-release error",
            Self::E0401 => "build metadata error",
            Self::E0901 | Self::E0902 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0201 => "empty version string",
            Self::E0202 => "expected numeric identifier",
            Self::E0203 => "leading zero in numeric identifier",
            Self::E0204 => "expected '.'",
            Self::E0301 => "empty pre-release identifier",
            Self::E0302 => "leading zero in numeric pre-release identifier",
            Self::E0401 => "empty build identifier",
            Self::E0901 => "unexpected trailing input",
            Self::E0902 => "input too long",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
