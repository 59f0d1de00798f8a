//! Magpie Host - the capability interface between evaluator and embedder.
//!
//! The evaluator never writes to a terminal, a buffer or a log directly.
//! Everything observable it does goes through one [`InterpreterHost`]
//! supplied when the interpreter is built:
//!
//! - [`InterpreterHost::emit`]: program-visible output (`print`)
//! - [`InterpreterHost::report_runtime_error`]: a runtime failure at a
//!   source [`Position`]
//!
//! Both calls are synchronous and infallible from the caller's side. A host
//! whose sink fails deals with that itself; the evaluator carries on as if
//! the call succeeded. Whether a runtime error ends the run is decided by
//! the evaluator, not here.
//!
//! # Provided hosts
//!
//! | Host | Use |
//! |---|---|
//! | [`ConsoleHost`] | `magpie run`: stdout for output, stderr for errors |
//! | [`RecordingHost`] | tests and parallel runs: keeps every event in order |
//! | [`NullHost`] | benchmarks, `--quiet`: drops everything |
//! | [`TracingHost`] | routes both channels into `tracing` |
//!
//! Embedders can implement the trait themselves; an IDE-style host that
//! produces diagnostics lives in `mag_diagnostic`.

mod console;
mod null;
mod recording;
mod tracing_host;

use std::sync::Arc;

pub use mag_ir::Position;

pub use console::ConsoleHost;
pub use null::NullHost;
pub use recording::{HostEvent, RecordingHost};
pub use tracing_host::TracingHost;

/// Capabilities an interpreter needs from the environment embedding it.
///
/// Calls arrive in program order, one at a time, and must be fully handled
/// before returning. Text arguments are borrowed for the duration of the
/// call; a host that wants to keep them copies them.
///
/// Methods take `&self` so a host can be shared through [`SharedHost`].
/// Hosts with state use interior mutability. The `Send + Sync` bound lets an
/// interpreter and its host move to a worker thread together; it does not
/// mean one host should serve several interpreters at once.
pub trait InterpreterHost: Send + Sync {
    /// Make `text` visible on the host's output channel.
    ///
    /// One call is one unit of output. Empty text is a valid unit and is
    /// delivered like any other.
    fn emit(&self, text: &str);

    /// Record or display a runtime error raised at `position`.
    fn report_runtime_error(&self, position: Position, message: &str);
}

impl<H: InterpreterHost + ?Sized> InterpreterHost for &H {
    #[inline]
    fn emit(&self, text: &str) {
        (**self).emit(text);
    }

    #[inline]
    fn report_runtime_error(&self, position: Position, message: &str) {
        (**self).report_runtime_error(position, message);
    }
}

impl<H: InterpreterHost + ?Sized> InterpreterHost for Box<H> {
    #[inline]
    fn emit(&self, text: &str) {
        (**self).emit(text);
    }

    #[inline]
    fn report_runtime_error(&self, position: Position, message: &str) {
        (**self).report_runtime_error(position, message);
    }
}

impl<H: InterpreterHost + ?Sized> InterpreterHost for Arc<H> {
    #[inline]
    fn emit(&self, text: &str) {
        (**self).emit(text);
    }

    #[inline]
    fn report_runtime_error(&self, position: Position, message: &str) {
        (**self).report_runtime_error(position, message);
    }
}

/// Host handle owned by an interpreter for its whole lifetime.
pub type SharedHost = Arc<dyn InterpreterHost>;

/// Console host on the process's stdout/stderr, without colors.
pub fn console_host() -> SharedHost {
    Arc::new(ConsoleHost::stdio())
}

/// Fresh recording host.
///
/// Returned as the concrete type so the caller can read the events back;
/// it coerces to [`SharedHost`] when passed to an interpreter.
pub fn recording_host() -> Arc<RecordingHost> {
    Arc::new(RecordingHost::new())
}

/// Host that discards all output and errors.
pub fn null_host() -> SharedHost {
    Arc::new(NullHost)
}

/// Host that forwards both channels to `tracing`.
pub fn tracing_host() -> SharedHost {
    Arc::new(TracingHost)
}
