//! Driver errors.

use std::fmt;
use std::io;

use mag_diagnostic::Diagnostic;

/// Why a `magpie` command failed. Every variant maps to exit code 1.
#[derive(Debug)]
pub enum Error {
    /// Bad command line. The message says what was wrong.
    Usage(String),
    Io {
        path: String,
        source: io::Error,
    },
    /// Lexing or parsing failed. The diagnostics have already been rendered.
    Parse {
        path: String,
        diagnostics: Vec<Diagnostic>,
    },
    /// The program reported runtime errors through its host.
    Runtime {
        path: String,
        errors: usize,
    },
    /// The run was interrupted after reporting `errors` runtime errors.
    Interrupted {
        path: String,
        errors: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(message) => write!(f, "{message}"),
            Error::Io { path, source } => write!(f, "cannot read `{path}`: {source}"),
            Error::Parse { path, diagnostics } => {
                let count = diagnostics.len();
                let noun = if count == 1 { "error" } else { "errors" };
                write!(f, "could not run `{path}` due to {count} syntax {noun}")
            }
            Error::Runtime { path, errors } => {
                let noun = if *errors == 1 { "error" } else { "errors" };
                write!(f, "`{path}` failed with {errors} runtime {noun}")
            }
            Error::Interrupted { path, errors: 0 } => write!(f, "`{path}` was interrupted"),
            Error::Interrupted { path, errors } => {
                let noun = if *errors == 1 { "error" } else { "errors" };
                write!(f, "`{path}` was interrupted after {errors} runtime {noun}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
