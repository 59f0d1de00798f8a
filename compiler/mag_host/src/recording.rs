//! Recording host.
//!
//! Keeps every call as a [`HostEvent`] in the order it arrived. Used by tests
//! to assert on exactly what crossed the boundary, and by the driver to run
//! several files in parallel and replay their output afterwards without
//! interleaving.

use parking_lot::Mutex;

use crate::{InterpreterHost, Position};

/// One observed host call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// `emit(text)`
    Output(String),
    /// `report_runtime_error(position, message)`
    RuntimeError(Position, String),
}

impl HostEvent {
    /// Re-issue this event against another host.
    pub fn deliver_to(&self, host: &dyn InterpreterHost) {
        match self {
            HostEvent::Output(text) => host.emit(text),
            HostEvent::RuntimeError(position, message) => {
                host.report_runtime_error(*position, message);
            }
        }
    }
}

/// Host that captures every call into an ordered event list.
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        RecordingHost {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all events so far.
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().clone()
    }

    /// Remove and return all events, leaving the host empty.
    pub fn take_events(&self) -> Vec<HostEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Emitted texts only, in order.
    pub fn output(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Output(text) => Some(text.clone()),
                HostEvent::RuntimeError(..) => None,
            })
            .collect()
    }

    /// Reported runtime errors only, in order.
    pub fn errors(&self) -> Vec<(Position, String)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                HostEvent::RuntimeError(position, message) => Some((*position, message.clone())),
                HostEvent::Output(_) => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    /// Deliver everything recorded so far to `host`, in order.
    ///
    /// The recording is left untouched.
    pub fn replay_into(&self, host: &dyn InterpreterHost) {
        // No lock is held while delivering.
        for event in self.events() {
            event.deliver_to(host);
        }
    }
}

impl InterpreterHost for RecordingHost {
    fn emit(&self, text: &str) {
        self.events.lock().push(HostEvent::Output(text.to_owned()));
    }

    fn report_runtime_error(&self, position: Position, message: &str) {
        self.events
            .lock()
            .push(HostEvent::RuntimeError(position, message.to_owned()));
    }
}

#[cfg(test)]
mod tests;
