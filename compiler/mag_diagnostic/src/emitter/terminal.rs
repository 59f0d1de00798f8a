//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use mag_ir::SourceMap;

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color=` value.
    pub fn parse(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceMap>,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter with an explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the source so locations and snippets can be rendered.
    #[must_use]
    pub fn with_source(mut self, source: SourceMap) -> Self {
        self.source = Some(source);
        self
    }

    /// File path shown in `-->` lines.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.paint(&severity.to_string(), color);
    }

    /// `  --> path:line:col` plus the offending line with a caret.
    fn write_location(&mut self, diagnostic: &Diagnostic) {
        let Some(position) = diagnostic.resolve_position(self.source.as_ref()) else {
            return;
        };

        let _ = write!(self.writer, "  ");
        self.paint("-->", colors::GUTTER);
        match &self.file_path {
            Some(path) => {
                let _ = writeln!(self.writer, " {path}:{position}");
            }
            None => {
                let _ = writeln!(self.writer, " {position}");
            }
        }

        let line_text = self
            .source
            .as_ref()
            .and_then(|source| source.line_text(position.line))
            .map(str::to_owned);
        if let Some(line_text) = line_text {
            let gutter = position.line.to_string();
            let pad = " ".repeat(gutter.len());
            let caret_pad = " ".repeat(position.column.saturating_sub(1) as usize);

            self.paint(&format!("{pad} |"), colors::GUTTER);
            let _ = writeln!(self.writer);
            self.paint(&format!("{gutter} |"), colors::GUTTER);
            let _ = writeln!(self.writer, " {line_text}");
            self.paint(&format!("{pad} |"), colors::GUTTER);
            let _ = write!(self.writer, " {caret_pad}");
            let caret = match diagnostic.severity {
                Severity::Error => colors::ERROR,
                Severity::Warning => colors::WARNING,
                Severity::Note => colors::NOTE,
            };
            self.paint("^", caret);
            let _ = writeln!(self.writer);
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        if self.colors {
            let _ = write!(
                self.writer,
                "{}[{}]{}",
                colors::BOLD,
                diagnostic.code,
                colors::RESET
            );
        } else {
            let _ = write!(self.writer, "[{}]", diagnostic.code);
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        self.write_location(diagnostic);

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.paint("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Terminal emitter on stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}
