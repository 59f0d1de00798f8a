//! Console host.
//!
//! Writes program output and runtime errors to two separate writers,
//! stdout and stderr by default. Each `emit` becomes one line.

use std::io::{self, Write};

use parking_lot::Mutex;

use crate::{InterpreterHost, Position};

/// ANSI color codes for error output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const LOCATION: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Host that prints to a pair of writers.
///
/// Errors are written as `file:line:col: runtime error: message`, or
/// `line:col: runtime error: message` when no file label is set.
///
/// Write failures are logged at `warn` and otherwise ignored: a closed pipe
/// on stdout must not turn into an evaluator fault.
pub struct ConsoleHost<O: Write + Send, E: Write + Send> {
    out: Mutex<O>,
    err: Mutex<E>,
    colors: bool,
    label: Option<String>,
}

impl ConsoleHost<io::Stdout, io::Stderr> {
    /// Console host on the process's stdout and stderr.
    pub fn stdio() -> Self {
        ConsoleHost::new(io::stdout(), io::stderr())
    }
}

impl<O: Write + Send, E: Write + Send> ConsoleHost<O, E> {
    /// Create a console host over arbitrary writers, without colors.
    pub fn new(out: O, err: E) -> Self {
        ConsoleHost {
            out: Mutex::new(out),
            err: Mutex::new(err),
            colors: false,
            label: None,
        }
    }

    /// Enable or disable ANSI colors on error output.
    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Prefix error locations with a file label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Recover the writers, e.g. to inspect what a test host wrote.
    pub fn into_writers(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }

    fn format_error(&self, position: Position, message: &str) -> String {
        let location = match &self.label {
            Some(label) => format!("{label}:{position}"),
            None => position.to_string(),
        };
        if self.colors {
            format!(
                "{}{location}{}: {}runtime error{}: {message}",
                colors::LOCATION,
                colors::RESET,
                colors::ERROR,
                colors::RESET,
            )
        } else {
            format!("{location}: runtime error: {message}")
        }
    }
}

impl<O: Write + Send, E: Write + Send> InterpreterHost for ConsoleHost<O, E> {
    fn emit(&self, text: &str) {
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "{text}").and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "console host failed to write program output");
        }
    }

    fn report_runtime_error(&self, position: Position, message: &str) {
        let line = self.format_error(position, message);
        let mut err_out = self.err.lock();
        if let Err(err) = writeln!(err_out, "{line}").and_then(|()| err_out.flush()) {
            tracing::warn!(error = %err, %position, "console host failed to write runtime error");
        }
    }
}

#[cfg(test)]
mod tests;
