use crate::{InterpreterHost, Position};

/// Host that accepts every call and does nothing with it.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHost;

impl InterpreterHost for NullHost {
    #[inline]
    fn emit(&self, _text: &str) {}

    #[inline]
    fn report_runtime_error(&self, _position: Position, _message: &str) {}
}
