//! Magpie Lexer - turns source text into spanned tokens.
//!
//! Built on `logos`. Lexing never stops at the first bad character: every
//! error is collected and the rest of the input is still tokenized, so the
//! driver can report all lexical problems in one pass.

mod token;

use std::fmt;

use logos::Logos;
use mag_diagnostic::{Diagnostic, ErrorCode};
use mag_ir::Span;

pub use token::{Token, TokenKind};

/// What went wrong while lexing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// Input no token pattern matches.
    #[default]
    InvalidCharacter,
    UnterminatedString,
    IntegerOutOfRange,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::InvalidCharacter => write!(f, "invalid character"),
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::IntegerOutOfRange => write!(f, "integer literal is too large"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    /// Offending text, for messages like "invalid character `$`".
    pub text: String,
}

impl LexError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, message) = match self.kind {
            LexErrorKind::InvalidCharacter => {
                (ErrorCode::E0002, format!("invalid character `{}`", self.text))
            }
            LexErrorKind::UnterminatedString => (ErrorCode::E0001, self.kind.to_string()),
            LexErrorKind::IntegerOutOfRange => (
                ErrorCode::E0003,
                format!("integer literal `{}` does not fit in 64 bits", self.text),
            ),
        };
        Diagnostic::error(code).with_message(message).with_span(self.span)
    }
}

/// Result of lexing a whole source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// Always ends with a single [`TokenKind::Eof`].
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokenize `source`.
pub fn lex(source: &str) -> LexOutput {
    let mut output = LexOutput::default();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = to_span(lexer.span());
        match result {
            Ok(kind) => output.tokens.push(Token::new(kind, span)),
            Err(kind) => output.errors.push(LexError {
                kind,
                span,
                text: lexer.slice().to_string(),
            }),
        }
    }

    let end = to_span(source.len()..source.len());
    output.tokens.push(Token::new(TokenKind::Eof, end));
    output
}

fn to_span(range: std::ops::Range<usize>) -> Span {
    // Sources past 4 GiB are not supported; pin to the last offset.
    Span::try_from_range(range).unwrap_or(Span::point(u32::MAX))
}
