//! Built-in functions.

use mag_host::InterpreterHost;

use crate::errors::{type_mismatch, wrong_arg_count};
use crate::{EvalErrorKind, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Builtin {
    /// `print(x)`: emit `x`'s display text through the host.
    Print,
    /// `len(s)`: number of characters in a string.
    Len,
    /// `str(x)`: display text of any value.
    Str,
}

impl Builtin {
    pub(crate) fn lookup(name: &str) -> Option<Self> {
        match name {
            "print" => Some(Builtin::Print),
            "len" => Some(Builtin::Len),
            "str" => Some(Builtin::Str),
            _ => None,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Builtin::Print => "print",
            Builtin::Len => "len",
            Builtin::Str => "str",
        }
    }

    pub(crate) fn arity(self) -> usize {
        match self {
            Builtin::Print | Builtin::Len | Builtin::Str => 1,
        }
    }

    /// Call with already evaluated arguments.
    pub(crate) fn call(
        self,
        args: &[Value],
        host: &dyn InterpreterHost,
    ) -> Result<Value, EvalErrorKind> {
        let [arg] = args else {
            return Err(wrong_arg_count(self.name(), self.arity(), args.len()));
        };
        match self {
            Builtin::Print => {
                host.emit(&arg.to_string());
                Ok(Value::Nil)
            }
            Builtin::Len => match arg {
                Value::Str(s) => Ok(Value::Int(
                    i64::try_from(s.chars().count()).unwrap_or(i64::MAX),
                )),
                other => Err(type_mismatch("str", other.type_name())),
            },
            Builtin::Str => Ok(Value::Str(arg.to_string())),
        }
    }
}

#[cfg(test)]
mod tests;
