//! Token types.
//!
//! A [`Token`] is owned by the caller and reused across scan calls: the
//! scanner clears it and then fills it. Text storage is pluggable through
//! [`TokenText`]. [`InlineText`] keeps up to `N` bytes in place and silently
//! truncates longer lexemes, [`OwnedText`] grows as needed.

use std::borrow::Cow;
use std::fmt;

use luffa_util::{FileIndex, Position};

use crate::punctuation::Punct;

/// Broad classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    #[default]
    None,
    Punctuation,
    Name,
    String,
    Number,
}

impl TokenKind {
    /// Lower-case name used in diagnostics.
    ///
    /// ```
    /// use luffa_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Punctuation.name(), "punctuation");
    /// assert_eq!(TokenKind::None.name(), "none");
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::None => "none",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Name => "name",
            TokenKind::String => "string",
            TokenKind::Number => "number",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Integer,
    Float,
}

/// Kind-specific refinement of a token.
///
/// Numbers carry [`NumberKind`]; punctuation carries its ordinal and strings
/// carry the ordinal of their opening quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Subtype {
    #[default]
    Unset,
    Number(NumberKind),
    Punct(Punct),
}

/// Storage for a token's text.
pub trait TokenText: Default {
    fn clear(&mut self);

    /// Replace the contents with `bytes`.
    fn set(&mut self, bytes: &[u8]);

    fn as_bytes(&self) -> &[u8];
}

/// Fixed-capacity inline storage. Text longer than `N` bytes is truncated.
#[derive(Clone, Copy)]
pub struct InlineText<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> InlineText<N> {
    pub const CAPACITY: usize = N;
}

impl<const N: usize> Default for InlineText<N> {
    fn default() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }
}

impl<const N: usize> TokenText for InlineText<N> {
    fn clear(&mut self) {
        self.len = 0;
    }

    fn set(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(N);
        self.buf[..len].copy_from_slice(&bytes[..len]);
        self.len = len;
    }

    fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl<const N: usize> PartialEq for InlineText<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for InlineText<N> {}

impl<const N: usize> fmt::Debug for InlineText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(self.as_bytes()))
    }
}

/// Growable heap storage.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct OwnedText(Vec<u8>);

impl TokenText for OwnedText {
    fn clear(&mut self) {
        self.0.clear();
    }

    fn set(&mut self, bytes: &[u8]) {
        self.0.clear();
        self.0.extend_from_slice(bytes);
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for OwnedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}

/// A classified lexeme with its position.
///
/// # Example
///
/// ```
/// use luffa_lex::{OwnedToken, Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("demo", b"  answer");
/// let mut token = OwnedToken::new();
/// assert!(scanner.next_token(&mut token));
/// assert_eq!(token.kind(), TokenKind::Name);
/// assert_eq!(token.text(), b"answer");
/// assert_eq!(token.line_offset(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Token<S: TokenText = OwnedText> {
    kind: TokenKind,
    subtype: Subtype,
    text: S,
    file_index: Option<FileIndex>,
    position: Position,
}

/// Token with growable text.
pub type OwnedToken = Token<OwnedText>;

/// Token with `N` bytes of inline text.
pub type InlineToken<const N: usize> = Token<InlineText<N>>;

impl<S: TokenText> Token<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to kind `None` with empty text.
    pub fn clear(&mut self) {
        self.kind = TokenKind::None;
        self.subtype = Subtype::Unset;
        self.text.clear();
        self.file_index = None;
        self.position = Position::START;
    }

    pub(crate) fn fill(&mut self, kind: TokenKind, subtype: Subtype, text: &[u8], position: Position) {
        self.kind = kind;
        self.subtype = subtype;
        self.text.set(text);
        self.position = position;
    }

    pub(crate) fn set_file_index(&mut self, index: Option<FileIndex>) {
        self.file_index = index;
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn subtype(&self) -> Subtype {
        self.subtype
    }

    #[inline]
    pub fn text(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Text decoded for display; invalid UTF-8 is replaced.
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.text())
    }

    #[inline]
    pub fn file_index(&self) -> Option<FileIndex> {
        self.file_index
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[inline]
    pub fn line_offset(&self) -> u32 {
        self.position.line_offset
    }

    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.position.byte_offset
    }

    /// Whether the token holds a scanned lexeme.
    pub fn is_valid(&self) -> bool {
        self.kind != TokenKind::None
    }

    pub fn number_kind(&self) -> Option<NumberKind> {
        match self.subtype {
            Subtype::Number(kind) => Some(kind),
            _ => None,
        }
    }

    /// Punctuation ordinal of a punctuation token, or the quote ordinal of a
    /// string token.
    pub fn punct(&self) -> Option<Punct> {
        match self.subtype {
            Subtype::Punct(punct) => Some(punct),
            _ => None,
        }
    }

    pub fn to_owned_token(&self) -> OwnedToken {
        let mut owned = OwnedToken::new();
        owned.fill(self.kind, self.subtype, self.text(), self.position);
        owned.file_index = self.file_index;
        owned
    }
}
