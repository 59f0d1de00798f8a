//! Span to position conversion.
//!
//! [`SourceMap`] owns a source text together with the byte offset of every
//! line start, so each lookup is a binary search instead of a rescan. The
//! evaluator builds one per run and consults it only when it has a runtime
//! error to report.

use std::sync::Arc;

use crate::{Position, Span};

/// Source text plus a precomputed line offset table.
#[derive(Clone, Debug)]
pub struct SourceMap {
    text: Arc<str>,
    /// Byte offset of each line start. `line_starts[0] == 0`.
    line_starts: Vec<u32>,
}

impl SourceMap {
    /// Index a source text.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0u32];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        SourceMap { text, line_starts }
    }

    /// The indexed source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of lines (a trailing newline starts an empty last line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the 1-based line containing `offset`.
    pub fn line_of(&self, offset: u32) -> u32 {
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Convert a byte offset to a 1-based position.
    ///
    /// Offsets past the end of the text clamp to the end. Offsets inside a
    /// multi-byte character resolve to that character's column.
    pub fn offset_to_position(&self, offset: u32) -> Position {
        let line = self.line_of(offset);
        let line_start = self
            .line_starts
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let end = (offset as usize).min(self.text.len());

        let column = self.text.as_bytes()[line_start..end]
            .iter()
            .filter(|&&b| !is_utf8_continuation(b))
            .count();
        let column = u32::try_from(column).unwrap_or(u32::MAX - 1) + 1;

        Position::new(line, column)
    }

    /// Position of the first byte of a span.
    #[inline]
    pub fn position(&self, span: Span) -> Position {
        self.offset_to_position(span.start)
    }

    /// Text of a single 1-based line, without its newline.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(idx)? as usize;
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.text.len(), |&next| next as usize - 1);
        let text = self.text.get(start..end)?;
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}

#[inline]
fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

#[cfg(test)]
mod tests;
