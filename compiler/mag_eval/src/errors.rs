//! Runtime error types.
//!
//! `EvalErrorKind` is the structured category; its `Display` impl is the
//! message handed to the host. Factory functions keep construction sites
//! short and mark the error paths cold.

use std::fmt;

use mag_ir::Span;

pub type EvalResult<T> = Result<T, EvalError>;

/// Typed runtime error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow {
        operation: &'static str,
    },

    // Operators
    /// Operator used on a type that does not support it.
    InvalidOperator {
        op: &'static str,
        type_name: &'static str,
    },
    /// Binary operator applied to operands of two different types.
    OperandMismatch {
        left: &'static str,
        right: &'static str,
    },
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    NonBoolCondition {
        got: &'static str,
    },

    // Names
    UndefinedVariable {
        name: String,
    },
    UndefinedFunction {
        name: String,
    },
    ArityMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    /// The run was interrupted through an `InterruptHandle`.
    Interrupted,
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),

            Self::InvalidOperator { op, type_name } => {
                write!(f, "operator `{op}` cannot be applied to {type_name}")
            }
            Self::OperandMismatch { left, right } => {
                write!(f, "cannot apply operator to `{left}` and `{right}`")
            }
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::NonBoolCondition { got } => write!(f, "condition must be bool, got {got}"),

            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::UndefinedFunction { name } => write!(f, "undefined function: {name}"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }

            Self::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// A runtime error and the source span it is attributed to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError { kind, span }
    }

    /// Message reported to the host.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

#[cold]
pub(crate) fn division_by_zero() -> EvalErrorKind {
    EvalErrorKind::DivisionByZero
}

#[cold]
pub(crate) fn modulo_by_zero() -> EvalErrorKind {
    EvalErrorKind::ModuloByZero
}

#[cold]
pub(crate) fn integer_overflow(operation: &'static str) -> EvalErrorKind {
    EvalErrorKind::IntegerOverflow { operation }
}

#[cold]
pub(crate) fn invalid_operator(op: &'static str, type_name: &'static str) -> EvalErrorKind {
    EvalErrorKind::InvalidOperator { op, type_name }
}

#[cold]
pub(crate) fn operand_mismatch(left: &'static str, right: &'static str) -> EvalErrorKind {
    EvalErrorKind::OperandMismatch { left, right }
}

#[cold]
pub(crate) fn type_mismatch(expected: &'static str, got: &'static str) -> EvalErrorKind {
    EvalErrorKind::TypeMismatch { expected, got }
}

#[cold]
pub(crate) fn undefined_variable(name: &str) -> EvalErrorKind {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
}

#[cold]
pub(crate) fn undefined_function(name: &str) -> EvalErrorKind {
    EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    }
}

#[cold]
pub(crate) fn wrong_arg_count(name: &'static str, expected: usize, got: usize) -> EvalErrorKind {
    EvalErrorKind::ArityMismatch {
        name,
        expected,
        got,
    }
}
