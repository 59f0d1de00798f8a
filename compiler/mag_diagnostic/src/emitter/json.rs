//! JSON Emitter
//!
//! Machine-readable diagnostic output: one JSON array of objects.

use std::io::Write;

use mag_ir::SourceMap;

use crate::Diagnostic;

use super::{escape_json, DiagnosticEmitter};

/// JSON emitter. Call [`begin`](Self::begin) before and [`end`](Self::end)
/// after the diagnostics to get a well-formed array.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
    source: Option<SourceMap>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            source: None,
        }
    }

    /// Attach the source so spans resolve to line/column.
    #[must_use]
    pub fn with_source(mut self, source: SourceMap) -> Self {
        self.source = Some(source);
        self
    }

    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "]");
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = write!(self.writer, ",");
        }
        self.first = false;

        let position = diagnostic.resolve_position(self.source.as_ref());
        let (line, column) = match position {
            Some(p) => (p.line.to_string(), p.column.to_string()),
            None => ("null".to_string(), "null".to_string()),
        };
        let notes = diagnostic
            .notes
            .iter()
            .map(|note| format!("\"{}\"", escape_json(note)))
            .collect::<Vec<_>>()
            .join(",");

        // Built by hand; the shape is fixed and small.
        let _ = write!(
            self.writer,
            "{{\"code\":\"{}\",\"severity\":\"{}\",\"message\":\"{}\",\"line\":{line},\"column\":{column},\"notes\":[{notes}]}}",
            diagnostic.code,
            diagnostic.severity,
            escape_json(&diagnostic.message),
        );
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
