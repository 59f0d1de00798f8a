//! Parse error types.

use mag_diagnostic::{Diagnostic, ErrorCode};
use mag_ir::Span;
use mag_lexer::TokenKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A specific token (or token class) was required.
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },
    ExpectedExpression { found: TokenKind },
    /// `(` or `{` never closed. The span of the error is the opener.
    UnclosedDelimiter { open: char },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::UnclosedDelimiter { .. } => ErrorCode::E1003,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                format!("expected {expected}, found {found}")
            }
            ParseErrorKind::ExpectedExpression { found } => {
                format!("expected expression, found {found}")
            }
            ParseErrorKind::UnclosedDelimiter { open } => format!("unclosed delimiter `{open}`"),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .with_span(self.span);
        match self.kind {
            ParseErrorKind::UnclosedDelimiter { open } => {
                let close = if open == '(' { ')' } else { '}' };
                diag.with_note(format!("add a matching `{close}`"))
            }
            _ => diag,
        }
    }
}
