//! Token cursor for navigating the token stream.

use mag_ir::Span;
use mag_lexer::{Token, TokenKind};

/// Cursor over a token list that always ends in `Eof`.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// End offset of the last consumed token, for building node spans.
    prev_end: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Cursor {
            tokens,
            pos: 0,
            prev_end: 0,
        }
    }

    /// Current token. Past the end this keeps returning the final `Eof`.
    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    #[inline]
    pub(crate) fn kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub(crate) fn span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token after the current one.
    pub(crate) fn peek_kind(&self) -> &'a TokenKind {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[(self.pos + 1).min(last)].kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.kind(), TokenKind::Eof)
    }

    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.kind() == kind
    }

    pub(crate) fn prev_end(&self) -> u32 {
        self.prev_end
    }

    /// Consume the current token and return it.
    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
            self.prev_end = token.span.end;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip statement separators (newlines and semicolons).
    pub(crate) fn skip_separators(&mut self) {
        while matches!(self.kind(), TokenKind::Newline | TokenKind::Semicolon) {
            self.advance();
        }
    }

    pub(crate) fn skip_newlines(&mut self) {
        while self.check(&TokenKind::Newline) {
            self.advance();
        }
    }

    /// Whether the next token that is not a newline is `kind`.
    pub(crate) fn check_past_newlines(&self, kind: &TokenKind) -> bool {
        self.tokens[self.pos..]
            .iter()
            .find(|t| t.kind != TokenKind::Newline)
            .is_some_and(|t| &t.kind == kind)
    }
}
