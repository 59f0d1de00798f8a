use crate::{InterpreterHost, Position};

/// Host that turns both channels into `tracing` events.
///
/// Output is logged at `info` under target `magpie::output`, runtime errors
/// at `error` under `magpie::runtime`. What actually gets printed depends on
/// the subscriber the embedder installed.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingHost;

impl InterpreterHost for TracingHost {
    fn emit(&self, text: &str) {
        tracing::info!(target: "magpie::output", "{text}");
    }

    fn report_runtime_error(&self, position: Position, message: &str) {
        tracing::error!(
            target: "magpie::runtime",
            line = position.line,
            column = position.column,
            "{message}"
        );
    }
}
