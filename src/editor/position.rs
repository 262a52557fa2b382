//! Caret position tracking.
//!
//! Converts a zero-based character offset into the 1-based line/column pair
//! shown on the status line. The scan is linear in the offset and is redone
//! on every query; there is no line index to keep in sync with edits.

use thiserror::Error;

/// A 1-based line/column location inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// The location of offset 0 in any document.
    pub const ORIGIN: Self = Self { line: 1, column: 1 };
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    #[error("caret offset {offset} is past the end of a {len}-character document")]
    OutOfRange { offset: usize, len: usize },
}

/// Locate the character offset `offset` inside `text`.
///
/// Only `'\n'` starts a new line; a carriage return counts as an ordinary
/// column.
///
/// # Errors
///
/// Returns [`LocateError::OutOfRange`] when `offset` exceeds the number of
/// characters in `text`.
pub fn locate(text: &str, offset: usize) -> Result<Position, LocateError> {
    let mut pos = Position::ORIGIN;
    let mut scanned = 0usize;
    for ch in text.chars().take(offset) {
        scanned += 1;
        if ch == '\n' {
            pos.line += 1;
            pos.column = 1;
        } else {
            pos.column += 1;
        }
    }
    if scanned < offset {
        return Err(LocateError::OutOfRange {
            offset,
            len: text.chars().count(),
        });
    }
    Ok(pos)
}
