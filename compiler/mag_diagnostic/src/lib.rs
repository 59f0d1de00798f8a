//! Diagnostic system for Magpie.
//!
//! - [`Diagnostic`]: code, severity, message and location of a problem
//! - [`ErrorCode`]: stable identifiers, first digit is the phase
//! - [`emitter`]: terminal and JSON renderers
//! - [`DiagnosticHost`]: an interpreter host that turns runtime errors into
//!   diagnostics, the way an editor integration wants them
//!
//! Lexer and parser errors become diagnostics directly. Runtime errors only
//! become diagnostics if the embedder chooses a host that produces them.

mod diagnostic;
pub mod emitter;
mod error_code;
mod host;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use host::DiagnosticHost;
