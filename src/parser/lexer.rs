//! Logos-based lexer for version strings
//!
//! Fast tokenization using the logos crate. Nothing is skipped: whitespace
//! and every other character outside the grammar become `ERROR` tokens.
//! Offsets come from the logos span; a token starting beyond `u32::MAX`
//! bytes is reported as `ERROR` at offset `u32::MAX`.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Byte offset one past the end of this token
    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();

        let (kind, offset) = match (logos_token, TextSize::try_from(self.inner.span().start)) {
            (Ok(t), Ok(offset)) => (t.into(), offset),
            (Err(()), Ok(offset)) => (SyntaxKind::ERROR, offset),
            (_, Err(_)) => (SyntaxKind::ERROR, TextSize::new(u32::MAX)),
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    #[regex(r"[0-9]+")]
    Digits,

    #[regex(r"[A-Za-z]+")]
    Letters,

    #[token("-")]
    Hyphen,

    #[token(".")]
    Dot,

    #[token("+")]
    Plus,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Digits => SyntaxKind::DIGITS,
            LogosToken::Letters => SyntaxKind::LETTERS,
            LogosToken::Hyphen => SyntaxKind::HYPHEN,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Plus => SyntaxKind::PLUS,
        }
    }
}
