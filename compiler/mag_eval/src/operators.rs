//! Binary and unary operator semantics.
//!
//! Integer arithmetic is checked: overflow is a runtime error, never a wrap
//! or a panic. `&&` and `||` are not handled here because they short-circuit;
//! the interpreter evaluates them directly.

use std::cmp::Ordering;

use mag_ir::{BinaryOp, UnaryOp};

use crate::errors::{
    division_by_zero, integer_overflow, invalid_operator, modulo_by_zero, operand_mismatch,
};
use crate::{EvalErrorKind, Value};

/// Apply a non-short-circuit binary operator to two evaluated operands.
pub(crate) fn evaluate_binary(
    op: BinaryOp,
    left: &Value,
    right: &Value,
) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Eq => return Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => return Ok(Value::Bool(left != right)),
        _ => {}
    }

    match (left, right) {
        (Value::Int(a), Value::Int(b)) => int_binary(op, *a, *b),
        (Value::Str(a), Value::Str(b)) => str_binary(op, a, b),
        (l, r) if l.type_name() == r.type_name() => {
            Err(invalid_operator(op.as_symbol(), l.type_name()))
        }
        (l, r) => Err(operand_mismatch(l.type_name(), r.type_name())),
    }
}

fn int_binary(op: BinaryOp, a: i64, b: i64) -> Result<Value, EvalErrorKind> {
    let result = match op {
        BinaryOp::Add => a.checked_add(b).ok_or_else(|| integer_overflow("addition"))?,
        BinaryOp::Sub => a
            .checked_sub(b)
            .ok_or_else(|| integer_overflow("subtraction"))?,
        BinaryOp::Mul => a
            .checked_mul(b)
            .ok_or_else(|| integer_overflow("multiplication"))?,
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            a.checked_div(b).ok_or_else(|| integer_overflow("division"))?
        }
        BinaryOp::Mod => {
            if b == 0 {
                return Err(modulo_by_zero());
            }
            a.checked_rem(b).ok_or_else(|| integer_overflow("modulo"))?
        }
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            return Ok(Value::Bool(compare(op, a.cmp(&b))));
        }
        BinaryOp::Eq | BinaryOp::NotEq | BinaryOp::And | BinaryOp::Or => {
            return Err(invalid_operator(op.as_symbol(), "int"));
        }
    };
    Ok(Value::Int(result))
}

fn str_binary(op: BinaryOp, a: &str, b: &str) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(joined))
        }
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            Ok(Value::Bool(compare(op, a.cmp(b))))
        }
        _ => Err(invalid_operator(op.as_symbol(), "str")),
    }
}

fn compare(op: BinaryOp, ordering: Ordering) -> bool {
    match op {
        BinaryOp::Lt => ordering.is_lt(),
        BinaryOp::LtEq => ordering.is_le(),
        BinaryOp::Gt => ordering.is_gt(),
        _ => ordering.is_ge(),
    }
}

/// Apply a unary operator.
pub(crate) fn evaluate_unary(op: UnaryOp, operand: &Value) -> Result<Value, EvalErrorKind> {
    match (op, operand) {
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (op, value) => Err(invalid_operator(op.as_symbol(), value.type_name())),
    }
}
