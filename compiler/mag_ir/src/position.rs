//! Line/column source positions.
//!
//! A [`Position`] is what crosses the interpreter/host boundary. Hosts never
//! see byte spans: they get the human-facing location the user would type
//! into an editor's "go to line" box.

use std::fmt;

/// Immutable 1-based line and column in a source file.
///
/// Columns count characters, not bytes, so a position points at the same
/// glyph an editor would highlight.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Start of a file.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a position from a 1-based line and column.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Position;
    crate::static_assert_size!(Position, 8);
}
