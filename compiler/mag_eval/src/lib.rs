//! Magpie Eval - tree-walking evaluator.
//!
//! The evaluator walks a parsed [`Program`](mag_ir::Program) statement by
//! statement. It never prints or logs program-visible output itself: `print`
//! goes to [`InterpreterHost::emit`](mag_host::InterpreterHost::emit) and
//! every runtime failure goes to
//! [`InterpreterHost::report_runtime_error`](mag_host::InterpreterHost::report_runtime_error),
//! exactly once, at the position of the construct that failed.
//!
//! # Runtime errors
//!
//! Failures are ordinary values ([`EvalError`]) threaded through `Result`.
//! When one reaches a top-level statement, that statement is abandoned and
//! the error is reported. What happens next is the [`ErrorPolicy`]:
//!
//! - [`ErrorPolicy::Abort`] (default): the run ends.
//! - [`ErrorPolicy::Continue`]: the next top-level statement runs.
//!
//! ```text
//! let host = mag_host::recording_host();
//! let mut interp = InterpreterBuilder::new().host(host.clone()).build();
//! let outcome = interp.run(&program, &source_map);
//! ```

mod builtins;
mod environment;
mod errors;
mod interpreter;
mod operators;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{ErrorPolicy, InterpreterBuilder, Interpreter, InterruptHandle, RunOutcome};
pub use value::Value;
