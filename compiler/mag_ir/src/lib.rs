//! Magpie IR - source locations and syntax tree.
//!
//! This crate sits at the bottom of the workspace. It owns the two location
//! types that every other layer passes around:
//!
//! - [`Span`]: a compact byte range produced by the lexer and parser.
//! - [`Position`]: a 1-based line/column pair handed to interpreter hosts.
//!
//! [`SourceMap`] converts the former into the latter. The syntax tree in
//! [`ast`] is what the parser produces and the evaluator walks.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in types that are copied
/// across every diagnostic and host call.
///
/// ```text
/// static_assert_size!(Span, 8);
/// ```
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod position;
mod source_map;
mod span;

pub use ast::{BinaryOp, Expr, ExprKind, Program, Stmt, StmtKind, UnaryOp};
pub use position::Position;
pub use source_map::SourceMap;
pub use span::{Span, SpanError};
