//! Byte cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking a byte buffer. Every byte is one character; a `\n` moves
//! the cursor to the next line and restarts the line offset.

use luffa_util::Position;

/// A cursor over a borrowed byte buffer.
///
/// # Example
///
/// ```
/// use luffa_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"a\nb");
/// assert_eq!(cursor.current(), Some(b'a'));
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.line(), 1);
/// assert_eq!(cursor.line_offset(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source being traversed.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (0-based).
    line: u32,

    /// Byte position at which the current line starts.
    line_start: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 0,
            line_start: 0,
        }
    }

    /// Returns the byte under the cursor, or `None` at the end.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    /// Returns the byte `offset` positions ahead of the cursor.
    ///
    /// ```
    /// use luffa_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"ab");
    /// assert_eq!(cursor.peek(1), Some(b'b'));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// Advances past the current byte. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(byte) = self.current() else {
            return;
        };
        self.position += 1;
        if byte == b'\n' {
            self.line += 1;
            self.line_start = self.position;
        }
    }

    /// Advances by up to `count` bytes, stopping at the end.
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Byte distance from the start of the current line.
    #[inline]
    pub fn line_offset(&self) -> u32 {
        u32::try_from(self.position - self.line_start).unwrap_or(u32::MAX)
    }

    /// Current location as a token position.
    pub fn location(&self) -> Position {
        Position::new(self.line, self.line_offset(), self.position)
    }

    /// Returns the bytes from `start` up to the cursor.
    ///
    /// ```
    /// use luffa_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"local x");
    /// cursor.advance_by(5);
    /// assert_eq!(cursor.slice_from(0), b"local");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.position]
    }

    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            line_start: self.line_start,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.line_start = snapshot.line_start;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub position: usize,
    pub line: u32,
    pub line_start: usize,
}
