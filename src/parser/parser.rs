//! Recursive descent parser for SemVer 2.0.0
//!
//! One method per BNF production, run over the logos token stream:
//!
//! ```text
//! valid-version     = version-core ["-" pre-release] ["+" build]
//! version-core      = numeric-ident "." numeric-ident "." numeric-ident
//! pre-release       = pre-release-ident ("." pre-release-ident)*
//! pre-release-ident = numeric-ident | alphanumeric-ident
//! build             = build-ident ("." build-ident)*
//! build-ident       = alphanumeric-ident | digits
//! ```
//!
//! The whole input must be consumed. The first violation aborts the parse;
//! there is no recovery.

use std::str::FromStr;

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::errors::{ErrorCode, ParseContext, ParseError, SyntaxError};
use super::lexer::{Token, tokenize};
use super::syntax_kind::SyntaxKind;
use crate::base::{
    Number, all_digits, is_build_identifier, is_numeric_identifier, is_pre_release_identifier,
};
use crate::version::Version;

/// Parse a version string.
///
/// ```
/// let v = semver::parse("1.0.0-alpha.0valid+build.007").unwrap();
/// assert_eq!(v.pre_release, ["alpha", "0valid"]);
/// assert_eq!(v.build, ["build", "007"]);
///
/// assert!(semver::parse("1.0.0-alpha.01").is_err());
/// ```
pub fn parse(input: &str) -> Result<Version, ParseError> {
    let result = check_length(input).and_then(|()| {
        let tokens = tokenize(input);
        Parser::new(input, &tokens).parse_version()
    });

    if let Err(err) = &result {
        tracing::trace!(
            input = %input,
            code = %err.code,
            offset = u32::from(err.range.start()),
            "rejected version string"
        );
    }

    result.map_err(ParseError::from)
}

/// Parse every string, stopping at the first failure.
///
/// Either all inputs parse and every version is returned in input order, or
/// the first error is returned and nothing else.
pub fn parse_all<I>(inputs: I) -> Result<Vec<Version>, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    inputs.into_iter().map(|s| parse(s.as_ref())).collect()
}

/// Check whether a string is a valid SemVer 2.0.0 version
pub fn is_valid(input: &str) -> bool {
    parse(input).is_ok()
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl FromStr for Number {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_length(s)?;
        let tokens = tokenize(s);
        let mut parser = Parser::new(s, &tokens);
        parser.reject_invalid_characters()?;
        let number = parser.parse_numeric_identifier()?;
        parser.expect_eof()?;
        Ok(number)
    }
}

/// The parser state
struct Parser<'a> {
    input: &'a str,
    tokens: &'a [Token<'a>],
    pos: usize,
    context: ParseContext,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, tokens: &'a [Token<'a>]) -> Self {
        Self {
            input,
            tokens,
            pos: 0,
            context: ParseContext::VersionCore,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if !self.at_eof() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect_eof(&self) -> Result<(), SyntaxError> {
        if self.at_eof() {
            Ok(())
        } else {
            Err(self.unexpected_trailing())
        }
    }

    /// Consume the longest run of identifier tokens and return its text.
    fn identifier(&mut self) -> Option<(&'a str, TextRange)> {
        let start = self.pos;
        while self.current().is_some_and(|t| t.kind.is_identifier_part()) {
            self.pos += 1;
        }
        if start == self.pos {
            return None;
        }

        let range = TextRange::new(self.tokens[start].offset, self.tokens[self.pos - 1].end());
        let input = self.input;
        Some((&input[range], range))
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn current_range(&self) -> TextRange {
        self.current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(TextSize::of(self.input)))
    }

    fn found(&self) -> &'static str {
        self.current()
            .map(|t| t.kind.describe())
            .unwrap_or("end of input")
    }

    /// Error at the current token, naming what was found instead.
    fn error(&self, code: ErrorCode) -> SyntaxError {
        SyntaxError::builder(code)
            .message(format!("{}, found {}", code.default_message(), self.found()))
            .range(self.current_range())
            .context(self.context)
            .hint(format!("expected {}", self.context.expected_description()))
            .build()
    }

    fn unexpected_trailing(&self) -> SyntaxError {
        let err = self.error(ErrorCode::E0901);
        let hint = match (self.context, self.current().map(|t| t.kind)) {
            (ParseContext::Build, Some(SyntaxKind::PLUS)) => {
                Some("build metadata may contain only one '+'")
            }
            (ParseContext::VersionCore, Some(SyntaxKind::DOT)) => {
                Some("a version core has exactly three fields")
            }
            (ParseContext::VersionCore, Some(SyntaxKind::LETTERS)) => {
                Some("separate the pre-release from the version core with '-'")
            }
            _ => None,
        };
        match hint {
            Some(hint) => err.with_hint(hint),
            None => err,
        }
    }

    fn reject_invalid_characters(&self) -> Result<(), SyntaxError> {
        match self.tokens.iter().find(|t| t.kind == SyntaxKind::ERROR) {
            Some(token) => Err(SyntaxError::builder(ErrorCode::E0101)
                .message(format!("invalid character {:?}", token.text))
                .range(TextRange::at(token.offset, TextSize::of(token.text)))
                .hint("versions may contain only [0-9A-Za-z], '-', '.' and '+'")
                .build()),
            None => Ok(()),
        }
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// ValidVersion = VersionCore ('-' PreRelease)? ('+' Build)?
    fn parse_version(mut self) -> Result<Version, SyntaxError> {
        if self.at_eof() {
            return Err(self.error(ErrorCode::E0201));
        }
        self.reject_invalid_characters()?;

        let (major, minor, patch) = self.parse_version_core()?;

        let pre_release = if self.eat(SyntaxKind::HYPHEN) {
            self.context = ParseContext::PreRelease;
            self.parse_pre_release()?
        } else {
            Vec::new()
        };

        let build = if self.eat(SyntaxKind::PLUS) {
            self.context = ParseContext::Build;
            self.parse_build()?
        } else {
            Vec::new()
        };

        self.expect_eof()?;

        Ok(Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }

    /// VersionCore = NumericIdentifier '.' NumericIdentifier '.' NumericIdentifier
    fn parse_version_core(&mut self) -> Result<(Number, Number, Number), SyntaxError> {
        let major = self.parse_numeric_identifier()?;
        self.expect_dot()?;
        let minor = self.parse_numeric_identifier()?;
        self.expect_dot()?;
        let patch = self.parse_numeric_identifier()?;
        Ok((major, minor, patch))
    }

    fn expect_dot(&mut self) -> Result<(), SyntaxError> {
        if self.eat(SyntaxKind::DOT) {
            Ok(())
        } else {
            Err(self.error(ErrorCode::E0204))
        }
    }

    /// NumericIdentifier = '0' | PositiveDigit Digit*
    fn parse_numeric_identifier(&mut self) -> Result<Number, SyntaxError> {
        let Some(token) = self.current().filter(|t| t.kind == SyntaxKind::DIGITS) else {
            return Err(self.error(ErrorCode::E0202));
        };

        match Number::new(token.text) {
            Some(number) => {
                self.bump();
                Ok(number)
            }
            None => Err(leading_zero(ErrorCode::E0203, token.text, self.current_range())
                .with_context(self.context)),
        }
    }

    /// PreRelease = PreReleaseIdentifier ('.' PreReleaseIdentifier)*
    fn parse_pre_release(&mut self) -> Result<Vec<SmolStr>, SyntaxError> {
        let mut identifiers = Vec::new();
        loop {
            let (ident, range) = self
                .identifier()
                .ok_or_else(|| self.error(ErrorCode::E0301))?;

            // Digit-only identifiers are numeric and must not have leading
            // zeros; anything with a non-digit is alphanumeric.
            if all_digits(ident) && !is_numeric_identifier(ident) {
                return Err(leading_zero(ErrorCode::E0302, ident, range).with_context(self.context));
            }
            debug_assert!(is_pre_release_identifier(ident));
            identifiers.push(SmolStr::new(ident));

            if !self.eat(SyntaxKind::DOT) {
                return Ok(identifiers);
            }
        }
    }

    /// Build = BuildIdentifier ('.' BuildIdentifier)*
    fn parse_build(&mut self) -> Result<Vec<SmolStr>, SyntaxError> {
        let mut identifiers = Vec::new();
        loop {
            let (ident, _) = self
                .identifier()
                .ok_or_else(|| self.error(ErrorCode::E0401))?;
            debug_assert!(is_build_identifier(ident));
            identifiers.push(SmolStr::new(ident));

            if !self.eat(SyntaxKind::DOT) {
                return Ok(identifiers);
            }
        }
    }
}

/// Offsets are `TextSize` (u32); longer inputs are rejected before lexing.
fn check_length(input: &str) -> Result<(), SyntaxError> {
    if TextSize::try_from(input.len()).is_ok() {
        return Ok(());
    }
    Err(SyntaxError::builder(ErrorCode::E0902)
        .message(format!("{}: {} bytes", ErrorCode::E0902.default_message(), input.len()))
        .range(TextRange::empty(TextSize::new(0)))
        .build())
}

fn leading_zero(code: ErrorCode, digits: &str, range: TextRange) -> SyntaxError {
    let trimmed = match digits.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    };
    SyntaxError::builder(code)
        .message(format!("{} {:?}", code.default_message(), digits))
        .range(range)
        .hint(format!("write '{}' instead of '{}'", trimmed, digits))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(input: &str) -> SyntaxError {
        parse(input).unwrap_err().syntax_error().clone()
    }

    #[test]
    fn test_parse_core() {
        let v = parse("10.20.30").unwrap();
        assert_eq!(v.major.as_str(), "10");
        assert_eq!(v.minor.as_str(), "20");
        assert_eq!(v.patch.as_str(), "30");
        assert!(v.pre_release.is_empty());
        assert!(v.build.is_empty());
    }

    #[test]
    fn test_parse_hyphen_runs_in_pre_release() {
        let v = parse("1.2.3----RC-SNAPSHOT.12.9.1--.12+788").unwrap();
        assert_eq!(v.pre_release, ["---RC-SNAPSHOT", "12", "9", "1--", "12"]);
        assert_eq!(v.build, ["788"]);
    }

    #[test]
    fn test_error_empty_input() {
        let e = err("");
        assert_eq!(e.code, ErrorCode::E0201);
        assert_eq!(e.range, TextRange::empty(TextSize::new(0)));
    }

    #[test]
    fn test_error_invalid_character_range() {
        let e = err("1.0.0-alpha_beta");
        assert_eq!(e.code, ErrorCode::E0101);
        assert_eq!(e.range, TextRange::new(TextSize::new(11), TextSize::new(12)));
    }

    #[test]
    fn test_error_missing_core_field() {
        let e = err("1.2");
        assert_eq!(e.code, ErrorCode::E0204);
        assert!(e.message.ends_with("found end of input"));

        assert_eq!(err("+justmeta").code, ErrorCode::E0202);
        assert_eq!(err("1..2").code, ErrorCode::E0202);
    }

    #[test]
    fn test_error_leading_zero_in_core() {
        let e = err("1.01.1");
        assert_eq!(e.code, ErrorCode::E0203);
        assert_eq!(e.range, TextRange::new(TextSize::new(2), TextSize::new(4)));
        assert_eq!(e.hint.as_deref(), Some("write '1' instead of '01'"));
    }

    #[test]
    fn test_error_leading_zero_in_pre_release() {
        let e = err("1.0.0-a.010");
        assert_eq!(e.code, ErrorCode::E0302);
        assert_eq!(e.context, ParseContext::PreRelease);
        assert_eq!(e.range, TextRange::new(TextSize::new(8), TextSize::new(11)));

        assert_eq!(err("1.0.0-00").hint.as_deref(), Some("write '0' instead of '00'"));
    }

    #[test]
    fn test_error_empty_identifiers() {
        let e = err("1.0.0-alpha..1");
        assert_eq!(e.code, ErrorCode::E0301);
        assert_eq!(e.range, TextRange::new(TextSize::new(12), TextSize::new(13)));

        assert_eq!(err("1.0.0-").code, ErrorCode::E0301);
        assert_eq!(err("1.0.0-+build").code, ErrorCode::E0301);
        assert_eq!(err("1.1.2+.123").code, ErrorCode::E0401);
        assert_eq!(err("1.1.2+").code, ErrorCode::E0401);
        assert_eq!(err("1.1.2+a.").context, ParseContext::Build);
    }

    #[test]
    fn test_error_trailing_input() {
        let e = err("9.8.7+meta+meta");
        assert_eq!(e.code, ErrorCode::E0901);
        assert_eq!(e.context, ParseContext::Build);
        assert_eq!(e.hint.as_deref(), Some("build metadata may contain only one '+'"));

        assert_eq!(
            err("1.2.3.DEV").hint.as_deref(),
            Some("a version core has exactly three fields")
        );
        assert_eq!(err("1.2.3beta").code, ErrorCode::E0901);
    }

    #[test]
    fn test_number_from_str() {
        assert_eq!("42".parse::<Number>().unwrap().as_str(), "42");
        assert_eq!("042".parse::<Number>().unwrap_err().code(), ErrorCode::E0203);
        assert_eq!("4.2".parse::<Number>().unwrap_err().code(), ErrorCode::E0901);
        assert_eq!(" 4".parse::<Number>().unwrap_err().code(), ErrorCode::E0101);
        assert_eq!("".parse::<Number>().unwrap_err().code(), ErrorCode::E0202);
    }
}
