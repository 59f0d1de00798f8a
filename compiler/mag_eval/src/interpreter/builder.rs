//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use mag_host::SharedHost;

use super::{ErrorPolicy, Interpreter, InterruptHandle};
use crate::Environment;

/// Builder for [`Interpreter`].
///
/// Every interpreter owns exactly one host for its whole lifetime. Without
/// an explicit [`host`](Self::host) it writes to the process console.
#[derive(Default)]
pub struct InterpreterBuilder {
    host: Option<SharedHost>,
    error_policy: ErrorPolicy,
    interrupt: Option<InterruptHandle>,
    env: Option<Environment>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host that receives output and runtime errors.
    #[must_use]
    pub fn host(mut self, host: SharedHost) -> Self {
        self.host = Some(host);
        self
    }

    /// Set what happens after a runtime error. Default is [`ErrorPolicy::Abort`].
    #[must_use]
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Share an interrupt flag with the caller, e.g. a Ctrl-C handler.
    #[must_use]
    pub fn interrupt(mut self, handle: InterruptHandle) -> Self {
        self.interrupt = Some(handle);
        self
    }

    /// Start from pre-populated globals.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            host: self.host.unwrap_or_else(mag_host::console_host),
            env: self.env.unwrap_or_default(),
            error_policy: self.error_policy,
            interrupt: self.interrupt.unwrap_or_default(),
        }
    }
}
