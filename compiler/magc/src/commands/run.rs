//! The `run` and `eval` commands.

use std::sync::Arc;

use mag_host::RecordingHost;
use rayon::prelude::*;

use super::{make_host, Reporter};
use crate::{execute, Error, FileResult, RunConfig, SourceFile};

/// Run source files, each on its own interpreter.
///
/// A single file runs directly on the configured host so output streams as
/// it happens. Several files run in parallel, each recording into its own
/// host; the recordings are then replayed in command-line order so output
/// from different files never interleaves.
///
/// Every file runs even if an earlier one fails or cannot be read. The
/// first failure, in file order, is returned.
pub fn run_files(paths: &[String], config: &RunConfig) -> Result<(), Error> {
    let loaded: Vec<Result<SourceFile, Error>> =
        paths.iter().map(|path| SourceFile::read(path)).collect();
    let readable: Vec<&SourceFile> = loaded.iter().filter_map(|file| file.as_ref().ok()).collect();

    let results: Vec<(FileResult, Option<Arc<RecordingHost>>)> = match readable.as_slice() {
        [file] => {
            let host = make_host(config, Some(file.label()));
            vec![(execute(file, host, config.error_policy), None)]
        }
        _ => run_parallel(&readable, config),
    };
    let mut results = results.into_iter();

    let mut reporter = Reporter::new(config);
    let mut first_error = None;
    for file in loaded {
        let file = match file {
            Ok(file) => file,
            Err(error) => {
                tracing::debug!(%error, "file unreadable");
                first_error.get_or_insert(error);
                continue;
            }
        };
        let Some((result, recording)) = results.next() else {
            break;
        };
        if let Some(recording) = recording {
            recording.replay_into(&*make_host(config, Some(file.label())));
        }
        if let FileResult::ParseFailed(diagnostics) = &result {
            reporter.report(&file, diagnostics);
        }
        if let Err(error) = result.into_result(&file) {
            tracing::debug!(%error, "file failed");
            first_error.get_or_insert(error);
        }
    }
    reporter.finish();

    first_error.map_or(Ok(()), Err)
}

#[tracing::instrument(level = "debug", skip_all, fields(files = files.len()))]
fn run_parallel(
    files: &[&SourceFile],
    config: &RunConfig,
) -> Vec<(FileResult, Option<Arc<RecordingHost>>)> {
    files
        .par_iter()
        .map(|file| {
            let recording = mag_host::recording_host();
            let result = execute(file, recording.clone(), config.error_policy);
            (result, Some(recording))
        })
        .collect()
}

/// Run a snippet given on the command line.
pub fn eval_source(source: &str, config: &RunConfig) -> Result<(), Error> {
    let file = SourceFile::new("<eval>", source);
    let result = execute(&file, make_host(config, None), config.error_policy);

    let mut reporter = Reporter::new(config);
    if let FileResult::ParseFailed(diagnostics) = &result {
        reporter.report(&file, diagnostics);
    }
    reporter.finish();

    result.into_result(&file).map(|_| ())
}
