//! Tree-walking interpreter.
//!
//! Each step returns [`EvalResult`]. A failure propagates with `?` up to the
//! top-level statement that started it, which is where it is turned into a
//! [`Position`] and reported to the host. Nothing below that boundary talks
//! to the host about errors, so each failure is reported exactly once.

mod builder;

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mag_host::{Position, SharedHost};
use mag_ir::{BinaryOp, Expr, ExprKind, Program, SourceMap, Span, Stmt, StmtKind};
use mag_stack::ensure_sufficient_stack;

pub use builder::InterpreterBuilder;

use crate::builtins::Builtin;
use crate::errors::{invalid_operator, undefined_function, undefined_variable};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{Environment, EvalError, EvalErrorKind, EvalResult, Value};

/// What the interpreter does after reporting a runtime error.
///
/// Either way the failing top-level statement is abandoned at the point of
/// failure; the policy only decides whether later statements run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
    /// Stop the run.
    #[default]
    Abort,
    /// Carry on with the next top-level statement.
    Continue,
}

impl ErrorPolicy {
    /// Parse `abort` or `continue`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "abort" => Some(ErrorPolicy::Abort),
            "continue" => Some(ErrorPolicy::Continue),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Abort => f.write_str("abort"),
            ErrorPolicy::Continue => f.write_str("continue"),
        }
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every statement ran without error.
    Completed,
    /// Every statement was attempted; this many failed (`Continue` policy).
    CompletedWithErrors(usize),
    /// Stopped at the first runtime error, raised at this position.
    Aborted(Position),
    /// Stopped because the interrupt flag was raised, after `errors`
    /// runtime errors had been reported (`Continue` policy).
    Interrupted { errors: usize },
}

impl RunOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, RunOutcome::Completed)
    }

    /// Number of runtime errors reported to the host during the run.
    pub fn error_count(self) -> usize {
        match self {
            RunOutcome::Completed => 0,
            RunOutcome::CompletedWithErrors(n) | RunOutcome::Interrupted { errors: n } => n,
            RunOutcome::Aborted(_) => 1,
        }
    }
}

/// Shared cancellation flag.
///
/// Checked before every statement and every loop iteration. Once raised it
/// stays raised until [`reset`](Self::reset).
#[derive(Clone, Debug, Default)]
pub struct InterruptHandle(Arc<AtomicBool>);

impl InterruptHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interrupt(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_interrupted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Magpie interpreter.
///
/// Globals persist across calls to [`run`](Self::run), so a REPL can feed
/// one program after another into the same interpreter.
pub struct Interpreter {
    host: SharedHost,
    env: Environment,
    error_policy: ErrorPolicy,
    interrupt: InterruptHandle,
}

impl Interpreter {
    /// Interpreter on the console host with default settings.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn host(&self) -> &SharedHost {
        &self.host
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    pub fn interrupt_handle(&self) -> InterruptHandle {
        self.interrupt.clone()
    }

    /// Run `program`, whose spans index into `source`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(statements = program.statements.len(), policy = %self.error_policy)
    )]
    pub fn run(&mut self, program: &Program, source: &SourceMap) -> RunOutcome {
        let mut errors = 0usize;

        for stmt in &program.statements {
            tracing::trace!(span = ?stmt.span, "statement");
            match self.exec_stmt(stmt) {
                Ok(()) => {}
                Err(err) if err.kind == EvalErrorKind::Interrupted => {
                    tracing::debug!(errors, "run interrupted");
                    return RunOutcome::Interrupted { errors };
                }
                Err(err) => {
                    let position = source.position(err.span);
                    tracing::debug!(%position, error = %err, "runtime error");
                    self.host.report_runtime_error(position, &err.message());
                    errors += 1;
                    if self.error_policy == ErrorPolicy::Abort {
                        return RunOutcome::Aborted(position);
                    }
                }
            }
        }

        if errors == 0 {
            RunOutcome::Completed
        } else {
            RunOutcome::CompletedWithErrors(errors)
        }
    }

    fn check_interrupt(&self, span: Span) -> EvalResult<()> {
        if self.interrupt.is_interrupted() {
            Err(EvalError::new(EvalErrorKind::Interrupted, span))
        } else {
            Ok(())
        }
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<()> {
        self.check_interrupt(stmt.span)?;
        match &stmt.kind {
            StmtKind::Let { name, value } => {
                let value = self.eval_expr(value)?;
                self.env.define(name, value);
            }
            StmtKind::Assign {
                name,
                name_span,
                value,
            } => {
                let value = self.eval_expr(value)?;
                if !self.env.assign(name, value) {
                    return Err(EvalError::new(undefined_variable(name), *name_span));
                }
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(condition)? {
                    self.exec_block(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.exec_block(else_branch)?;
                }
            }
            StmtKind::While { condition, body } => loop {
                self.check_interrupt(stmt.span)?;
                if !self.eval_condition(condition)? {
                    break;
                }
                self.exec_block(body)?;
            },
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
            }
        }
        Ok(())
    }

    /// Run statements in a fresh scope, popping it whether or not they fail.
    fn exec_block(&mut self, stmts: &[Stmt]) -> EvalResult<()> {
        self.env.push_scope();
        let result = ensure_sufficient_stack(|| stmts.iter().try_for_each(|s| self.exec_stmt(s)));
        self.env.pop_scope();
        result
    }

    fn eval_condition(&mut self, condition: &Expr) -> EvalResult<bool> {
        let value = self.eval_expr(condition)?;
        value.as_bool().ok_or_else(|| {
            EvalError::new(
                EvalErrorKind::NonBoolCondition {
                    got: value.type_name(),
                },
                condition.span,
            )
        })
    }

    fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult<Value> {
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Nil => Ok(Value::Nil),
            ExprKind::Ident(name) => self
                .env
                .lookup(name)
                .cloned()
                .ok_or_else(|| EvalError::new(undefined_variable(name), expr.span)),
            ExprKind::Unary {
                op,
                op_span,
                operand,
            } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(*op, &operand).map_err(|kind| EvalError::new(kind, *op_span))
            }
            ExprKind::Binary {
                op: op @ (BinaryOp::And | BinaryOp::Or),
                op_span,
                left,
                right,
            } => self.eval_logical(*op, *op_span, left, right),
            ExprKind::Binary {
                op,
                op_span,
                left,
                right,
            } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(*op, &left, &right).map_err(|kind| EvalError::new(kind, *op_span))
            }
            ExprKind::Call {
                callee,
                callee_span,
                args,
            } => {
                let builtin = Builtin::lookup(callee)
                    .ok_or_else(|| EvalError::new(undefined_function(callee), *callee_span))?;
                let args = args
                    .iter()
                    .map(|arg| self.eval_expr(arg))
                    .collect::<EvalResult<Vec<_>>>()?;
                builtin
                    .call(&args, &*self.host)
                    .map_err(|kind| EvalError::new(kind, *callee_span))
            }
        }
    }

    /// `&&` and `||`: the right operand runs only when it decides the result.
    fn eval_logical(
        &mut self,
        op: BinaryOp,
        op_span: Span,
        left: &Expr,
        right: &Expr,
    ) -> EvalResult<Value> {
        let expect_bool = |value: Value| {
            value.as_bool().ok_or_else(|| {
                EvalError::new(invalid_operator(op.as_symbol(), value.type_name()), op_span)
            })
        };

        let lhs = expect_bool(self.eval_expr(left)?)?;
        let short_circuit = match op {
            BinaryOp::And => !lhs,
            _ => lhs,
        };
        if short_circuit {
            return Ok(Value::Bool(lhs));
        }
        let rhs = expect_bool(self.eval_expr(right)?)?;
        Ok(Value::Bool(rhs))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
