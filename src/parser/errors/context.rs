//! Parse context tracking for context-aware error messages
//!
//! The parser records which section of the version it is in so that
//! messages say where the error occurred.

/// The section of a version string being parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseContext {
    /// The `major.minor.patch` triple
    #[default]
    VersionCore,
    /// The `-`-prefixed pre-release section
    PreRelease,
    /// The `+`-prefixed build metadata section
    Build,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::VersionCore => "in version core",
            Self::PreRelease => "in pre-release",
            Self::Build => "in build metadata",
        }
    }

    /// Get a description of what is expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::VersionCore => "MAJOR.MINOR.PATCH with no leading zeros",
            Self::PreRelease => "dot-separated identifiers of [0-9A-Za-z-]",
            Self::Build => "dot-separated identifiers of [0-9A-Za-z-]",
        }
    }
}
