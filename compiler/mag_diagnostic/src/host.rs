//! Interpreter host for editor integrations.
//!
//! An IDE does not want runtime errors on stderr; it wants them as
//! diagnostics it can underline. [`DiagnosticHost`] collects each reported
//! runtime error as an `E6001` [`Diagnostic`] at the exact position the
//! evaluator passed, and buffers program output for an output panel.

use mag_host::{InterpreterHost, Position};
use parking_lot::Mutex;

use crate::{Diagnostic, ErrorCode};

#[derive(Debug, Default)]
pub struct DiagnosticHost {
    output: Mutex<String>,
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticHost {
    pub fn new() -> Self {
        DiagnosticHost::default()
    }

    /// Everything emitted so far, one line per `emit`.
    pub fn output(&self) -> String {
        self.output.lock().clone()
    }

    /// Diagnostics collected so far, in report order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.lock().iter().any(Diagnostic::is_error)
    }

    /// Take the collected diagnostics, e.g. before re-running a changed file.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }

    pub fn clear(&self) {
        self.output.lock().clear();
        self.diagnostics.lock().clear();
    }
}

impl InterpreterHost for DiagnosticHost {
    fn emit(&self, text: &str) {
        let mut output = self.output.lock();
        output.push_str(text);
        output.push('\n');
    }

    fn report_runtime_error(&self, position: Position, message: &str) {
        let diagnostic = Diagnostic::error(ErrorCode::E6001)
            .with_message(message)
            .with_position(position);
        self.diagnostics.lock().push(diagnostic);
    }
}
