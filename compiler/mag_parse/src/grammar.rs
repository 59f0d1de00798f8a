//! Recursive-descent grammar.
//!
//! Statements are parsed top-down; binary expressions use precedence
//! climbing driven by [`BinaryOp::precedence`]. On an error the parser
//! records it, skips to the next statement separator and keeps going.

use mag_ir::{BinaryOp, Expr, ExprKind, Program, Span, Stmt, StmtKind, UnaryOp};
use mag_lexer::{Token, TokenKind};
use mag_stack::ensure_sufficient_stack;

use crate::cursor::Cursor;
use crate::{ParseError, ParseErrorKind};

type ParseResult<T> = Result<T, ParseError>;

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
        }
    }

    pub(crate) fn parse_program(mut self) -> (Program, Vec<ParseError>) {
        let mut statements = Vec::new();
        self.cursor.skip_separators();
        while !self.cursor.is_at_end() {
            match self.statement_with_terminator(false) {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    // A stray `}` has no block to close at the top level.
                    if self.recover(error) {
                        self.cursor.advance();
                    }
                }
            }
            self.cursor.skip_separators();
        }
        (Program::new(statements), self.errors)
    }

    /// Record `error` and skip to the start of the next statement.
    ///
    /// Returns `true` when skipping stopped on a `}`, which is left unconsumed.
    fn recover(&mut self, error: ParseError) -> bool {
        tracing::trace!(?error, "parse error, synchronizing");
        self.errors.push(error);
        loop {
            match self.cursor.kind() {
                TokenKind::Eof => return false,
                TokenKind::RBrace => return true,
                TokenKind::Newline | TokenKind::Semicolon => {
                    self.cursor.advance();
                    return false;
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// A statement followed by a separator, end of input, or (in a block)
    /// the closing brace.
    fn statement_with_terminator(&mut self, in_block: bool) -> ParseResult<Stmt> {
        let stmt = self.statement()?;
        match self.cursor.kind() {
            TokenKind::Newline | TokenKind::Semicolon | TokenKind::Eof => Ok(stmt),
            TokenKind::RBrace if in_block => Ok(stmt),
            found => Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    expected: "newline or `;` after statement",
                    found: found.clone(),
                },
                self.cursor.span(),
            )),
        }
    }

    fn statement(&mut self) -> ParseResult<Stmt> {
        let start = self.cursor.span().start;
        match self.cursor.kind() {
            TokenKind::Let => self.let_statement(start),
            TokenKind::If => self.if_statement(start),
            TokenKind::While => self.while_statement(start),
            TokenKind::Ident(_) if self.cursor.peek_kind() == &TokenKind::Eq => {
                self.assign_statement(start)
            }
            _ => {
                let expr = self.expression()?;
                let span = expr.span;
                Ok(Stmt::new(StmtKind::Expr(expr), span))
            }
        }
    }

    fn let_statement(&mut self, start: u32) -> ParseResult<Stmt> {
        self.cursor.advance(); // `let`
        let (name, _) = self.identifier("variable name after `let`")?;
        self.expect(&TokenKind::Eq, "`=` after variable name")?;
        let value = self.expression()?;
        Ok(Stmt::new(
            StmtKind::Let { name, value },
            Span::new(start, self.cursor.prev_end()),
        ))
    }

    fn assign_statement(&mut self, start: u32) -> ParseResult<Stmt> {
        let (name, name_span) = self.identifier("variable name")?;
        self.cursor.advance(); // `=`
        let value = self.expression()?;
        Ok(Stmt::new(
            StmtKind::Assign {
                name,
                name_span,
                value,
            },
            Span::new(start, self.cursor.prev_end()),
        ))
    }

    fn if_statement(&mut self, start: u32) -> ParseResult<Stmt> {
        self.cursor.advance(); // `if`
        let condition = self.expression()?;
        let then_branch = self.block()?;

        let else_branch = if self.cursor.check_past_newlines(&TokenKind::Else) {
            self.cursor.skip_newlines();
            self.cursor.advance(); // `else`
            if self.cursor.check(&TokenKind::If) {
                let nested_start = self.cursor.span().start;
                let nested = ensure_sufficient_stack(|| self.if_statement(nested_start))?;
                Some(vec![nested])
            } else {
                Some(self.block()?)
            }
        } else {
            None
        };

        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            Span::new(start, self.cursor.prev_end()),
        ))
    }

    fn while_statement(&mut self, start: u32) -> ParseResult<Stmt> {
        self.cursor.advance(); // `while`
        let condition = self.expression()?;
        let body = self.block()?;
        Ok(Stmt::new(
            StmtKind::While { condition, body },
            Span::new(start, self.cursor.prev_end()),
        ))
    }

    /// `{ statements }`
    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let open = self.cursor.span();
        self.expect(&TokenKind::LBrace, "`{`")?;

        let mut statements = Vec::new();
        self.cursor.skip_separators();
        while !self.cursor.check(&TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(ParseError::new(
                    ParseErrorKind::UnclosedDelimiter { open: '{' },
                    open,
                ));
            }
            match ensure_sufficient_stack(|| self.statement_with_terminator(true)) {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    self.recover(error);
                }
            }
            self.cursor.skip_separators();
        }
        self.cursor.advance(); // `}`
        Ok(statements)
    }

    fn expression(&mut self) -> ParseResult<Expr> {
        self.binary(1)
    }

    fn binary(&mut self, min_precedence: u8) -> ParseResult<Expr> {
        let mut left = self.unary()?;

        while let Some(op) = binary_op(self.cursor.kind()) {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            let op_span = self.cursor.advance().span;
            // An operator at the end of a line continues onto the next.
            self.cursor.skip_newlines();
            let right = ensure_sufficient_stack(|| self.binary(precedence + 1))?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    op_span,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        let op = match self.cursor.kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Bang => UnaryOp::Not,
            _ => return self.primary(),
        };
        let op_span = self.cursor.advance().span;
        let operand = ensure_sufficient_stack(|| self.unary())?;
        let span = op_span.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                op_span,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.current();
        let kind = match &token.kind {
            TokenKind::Int(value) => ExprKind::Int(*value),
            TokenKind::Str(value) => ExprKind::Str(value.clone()),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Nil => ExprKind::Nil,
            TokenKind::Ident(name) => {
                if self.cursor.peek_kind() == &TokenKind::LParen {
                    return self.call(name.clone(), token.span);
                }
                ExprKind::Ident(name.clone())
            }
            TokenKind::LParen => return self.parenthesized(),
            found => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedExpression {
                        found: found.clone(),
                    },
                    token.span,
                ))
            }
        };
        self.cursor.advance();
        Ok(Expr::new(kind, token.span))
    }

    fn parenthesized(&mut self) -> ParseResult<Expr> {
        let open = self.cursor.advance().span;
        self.cursor.skip_newlines();
        let inner = ensure_sufficient_stack(|| self.expression())?;
        self.cursor.skip_newlines();
        self.close_paren(open)?;
        // Keep the inner node; widen its span to cover the parentheses.
        Ok(Expr::new(inner.kind, Span::new(open.start, self.cursor.prev_end())))
    }

    fn call(&mut self, callee: String, callee_span: Span) -> ParseResult<Expr> {
        self.cursor.advance(); // callee
        let open = self.cursor.advance().span; // `(`
        let mut args = Vec::new();

        self.cursor.skip_newlines();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                args.push(ensure_sufficient_stack(|| self.expression())?);
                self.cursor.skip_newlines();
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
                self.cursor.skip_newlines();
            }
        }
        self.close_paren(open)?;

        Ok(Expr::new(
            ExprKind::Call {
                callee,
                callee_span,
                args,
            },
            Span::new(callee_span.start, self.cursor.prev_end()),
        ))
    }

    fn close_paren(&mut self, open: Span) -> ParseResult<()> {
        if self.cursor.eat(&TokenKind::RParen) {
            return Ok(());
        }
        let error = if self.cursor.is_at_end() {
            ParseError::new(ParseErrorKind::UnclosedDelimiter { open: '(' }, open)
        } else {
            ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    expected: "`)`",
                    found: self.cursor.kind().clone(),
                },
                self.cursor.span(),
            )
        };
        Err(error)
    }

    fn identifier(&mut self, expected: &'static str) -> ParseResult<(String, Span)> {
        let token = self.cursor.current();
        if let TokenKind::Ident(name) = &token.kind {
            self.cursor.advance();
            Ok((name.clone(), token.span))
        } else {
            Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    expected,
                    found: token.kind.clone(),
                },
                token.span,
            ))
        }
    }

    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> ParseResult<()> {
        if self.cursor.eat(kind) {
            Ok(())
        } else {
            Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    expected,
                    found: self.cursor.kind().clone(),
                },
                self.cursor.span(),
            ))
        }
    }
}

fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Mod,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::AndAnd => BinaryOp::And,
        TokenKind::OrOr => BinaryOp::Or,
        _ => return None,
    })
}
