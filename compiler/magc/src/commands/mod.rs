//! Driver commands and the helpers they share.

mod check;
mod run;

pub use check::check_files;
pub use run::{eval_source, run_files};

use std::io::{self, IsTerminal};
use std::sync::Arc;

use mag_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use mag_diagnostic::Diagnostic;
use mag_host::{ConsoleHost, SharedHost};

use crate::{HostKind, OutputFormat, RunConfig, SourceFile};

/// Build the host a run reports to.
///
/// `label` prefixes console error locations, normally the file path.
pub fn make_host(config: &RunConfig, label: Option<&str>) -> SharedHost {
    match config.host {
        HostKind::Console => {
            let colors = config.color.should_use_colors(io::stderr().is_terminal());
            let host = ConsoleHost::stdio().with_colors(colors);
            match label {
                Some(label) => Arc::new(host.with_label(label)),
                None => Arc::new(host),
            }
        }
        HostKind::Quiet => mag_host::null_host(),
        HostKind::Tracing => mag_host::tracing_host(),
    }
}

/// Renders syntax diagnostics to stderr in the configured format.
///
/// In JSON mode all diagnostics of one command go into a single array,
/// which [`finish`](Self::finish) closes.
pub(crate) struct Reporter {
    config: RunConfig,
    json: Option<JsonEmitter<io::Stderr>>,
}

impl Reporter {
    pub(crate) fn new(config: &RunConfig) -> Self {
        let json = match config.format {
            OutputFormat::Json => {
                let mut emitter = JsonEmitter::new(io::stderr());
                emitter.begin();
                Some(emitter)
            }
            OutputFormat::Text => None,
        };
        Reporter {
            config: *config,
            json,
        }
    }

    pub(crate) fn report(&mut self, file: &SourceFile, diagnostics: &[Diagnostic]) {
        if let Some(json) = &mut self.json {
            // One emitter serves many files, so resolve positions up front.
            for diagnostic in diagnostics {
                let resolved = match diagnostic.resolve_position(Some(file.source_map())) {
                    Some(position) => diagnostic.clone().with_position(position),
                    None => diagnostic.clone(),
                };
                json.emit(&resolved);
            }
            return;
        }

        let mut emitter =
            TerminalEmitter::stderr(self.config.color, io::stderr().is_terminal())
                .with_source(file.source_map().clone())
                .with_file_path(file.label());
        emitter.emit_all(diagnostics);
        emitter.flush();
    }

    pub(crate) fn finish(self) {
        if let Some(mut json) = self.json {
            json.end();
            json.flush();
        }
    }
}
