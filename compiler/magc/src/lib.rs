//! Magpie driver library.
//!
//! Everything the `magpie` binary does lives here so it can be tested
//! without spawning a process:
//!
//! - [`config`]: command-line parsing into a [`Cli`]
//! - [`commands`]: `run`, `eval` and `check`
//! - [`execute`]: parse one source and run it on a given host
//! - [`init_tracing`]: opt-in logging through `RUST_LOG`

pub mod commands;
pub mod config;
mod error;
mod source;
mod tracing_setup;

use mag_diagnostic::Diagnostic;
use mag_eval::{ErrorPolicy, InterpreterBuilder, RunOutcome};
use mag_host::SharedHost;

pub use config::{parse_args, Cli, Command, HostKind, OutputFormat, RunConfig};
pub use error::Error;
pub use source::SourceFile;
pub use tracing_setup::init_tracing;

/// What happened to one source file.
#[derive(Clone, Debug, PartialEq)]
pub enum FileResult {
    /// Lexing or parsing failed; nothing was evaluated and the host was
    /// never called.
    ParseFailed(Vec<Diagnostic>),
    /// The program ran.
    Ran(RunOutcome),
}

impl FileResult {
    /// Convert into the driver's error type, naming `file` in the error.
    pub fn into_result(self, file: &SourceFile) -> Result<RunOutcome, Error> {
        let path = file.label().to_string();
        match self {
            FileResult::ParseFailed(diagnostics) => Err(Error::Parse { path, diagnostics }),
            FileResult::Ran(RunOutcome::Interrupted { errors }) => {
                Err(Error::Interrupted { path, errors })
            }
            FileResult::Ran(outcome) if outcome.error_count() > 0 => Err(Error::Runtime {
                path,
                errors: outcome.error_count(),
            }),
            FileResult::Ran(outcome) => Ok(outcome),
        }
    }
}

/// Parse `file` and, if it parses cleanly, run it on `host`.
///
/// Parse diagnostics are returned, never sent to the host: the host only
/// hears about output and runtime errors.
#[tracing::instrument(level = "debug", skip_all, fields(file = %file.label()))]
pub fn execute(file: &SourceFile, host: SharedHost, policy: ErrorPolicy) -> FileResult {
    let parsed = mag_parse::parse(file.text());
    if parsed.has_errors() {
        tracing::debug!(count = parsed.diagnostics.len(), "parse failed");
        return FileResult::ParseFailed(parsed.diagnostics);
    }

    let mut interpreter = InterpreterBuilder::new()
        .host(host)
        .error_policy(policy)
        .build();
    let outcome = interpreter.run(&parsed.program, file.source_map());
    tracing::debug!(?outcome, "run finished");
    FileResult::Ran(outcome)
}
