//! Magpie Parser - tokens to syntax tree.
//!
//! [`parse`] runs the lexer and the parser together and returns the program
//! along with every lexical and syntactic problem found, already converted
//! to diagnostics. A program with diagnostics is still returned (with the
//! broken statements left out) so tooling can inspect the rest, but the
//! driver never evaluates it.

mod cursor;
mod error;
mod grammar;

use mag_diagnostic::Diagnostic;
use mag_ir::Program;
use mag_lexer::Token;

pub use error::{ParseError, ParseErrorKind};

/// Program plus front-end diagnostics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Lex and parse `source`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> ParseOutput {
    let lexed = mag_lexer::lex(source);
    let (program, errors) = parse_tokens(&lexed.tokens);

    let mut diagnostics: Vec<Diagnostic> =
        lexed.errors.iter().map(mag_lexer::LexError::to_diagnostic).collect();
    diagnostics.extend(errors.iter().map(ParseError::to_diagnostic));
    diagnostics.sort_by_key(|diag| diag.span.map(|span| span.start));

    ParseOutput {
        program,
        diagnostics,
    }
}

/// Parse an already lexed token stream (as produced by [`mag_lexer::lex`]).
pub fn parse_tokens(tokens: &[Token]) -> (Program, Vec<ParseError>) {
    if tokens.is_empty() {
        return (Program::default(), Vec::new());
    }
    grammar::Parser::new(tokens).parse_program()
}
