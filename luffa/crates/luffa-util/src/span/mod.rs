//! Token positions and source file bookkeeping.
//!
//! Positions produced by the scanner are zero-based: `line` counts consumed
//! newlines, `line_offset` is the byte distance from the start of that line
//! and `byte_offset` is the absolute distance from the start of the buffer.

mod source_map;

pub use source_map::{SourceFile, SourceMap};

use std::fmt;

/// Caller-assigned identifier of the file a token came from.
///
/// The scanner never interprets it; it is copied onto every token so that a
/// consumer juggling several files can map a token back to its origin.
///
/// # Examples
///
/// ```
/// use luffa_util::FileIndex;
///
/// let index = FileIndex(3);
/// assert_eq!(index.as_usize(), 3);
/// assert_eq!(index.to_string(), "#3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileIndex(pub usize);

impl FileIndex {
    /// Returns the raw index value.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for FileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a token starts in its source buffer.
///
/// # Examples
///
/// ```
/// use luffa_util::Position;
///
/// let pos = Position::new(2, 4, 19);
/// assert_eq!(pos.line, 2);
/// assert_eq!(pos.to_string(), "2:4");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Byte offset from the start of the line.
    pub line_offset: u32,
    /// Byte offset from the start of the buffer.
    pub byte_offset: usize,
}

impl Position {
    /// Position of the first byte of a buffer.
    pub const START: Position = Position {
        line: 0,
        line_offset: 0,
        byte_offset: 0,
    };

    pub fn new(line: u32, line_offset: u32, byte_offset: usize) -> Self {
        Self {
            line,
            line_offset,
            byte_offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.line_offset)
    }
}
