//! The `check` command: lex and parse without running.

use super::Reporter;
use crate::{Error, RunConfig, SourceFile};

/// Check every file, reporting all syntax errors.
///
/// Returns the first failing file's error after all files are checked.
pub fn check_files(paths: &[String], config: &RunConfig) -> Result<(), Error> {
    let mut reporter = Reporter::new(config);
    let mut first_error = None;

    for path in paths {
        let file = match SourceFile::read(path) {
            Ok(file) => file,
            Err(error) => {
                first_error.get_or_insert(error);
                continue;
            }
        };
        let parsed = mag_parse::parse(file.text());
        tracing::debug!(
            file = %file.label(),
            statements = parsed.program.statements.len(),
            diagnostics = parsed.diagnostics.len(),
            "checked"
        );
        if parsed.has_errors() {
            reporter.report(&file, &parsed.diagnostics);
            first_error.get_or_insert(Error::Parse {
                path: file.label().to_string(),
                diagnostics: parsed.diagnostics,
            });
        }
    }
    reporter.finish();

    first_error.map_or(Ok(()), Err)
}
