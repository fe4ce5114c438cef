//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, its construction and the
//! dispatch that picks which lexeme family the next token belongs to.

use luffa_util::{FileIndex, Handler, Position};

use crate::comment::{CStyleComments, CommentKind, CommentSyntax};
use crate::cursor::Cursor;
use crate::options::{ScanFlags, ScanOptions};
use crate::punctuation::{Punct, PunctuationTable};
use crate::token::{OwnedToken, Subtype, Token, TokenKind, TokenText};

/// Punctuation ordinals that have a lexical role, resolved from the active
/// punctuation set by character.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Roles {
    pub(crate) double_quote: Option<Punct>,
    pub(crate) single_quote: Option<Punct>,
    pub(crate) period: Option<Punct>,
    pub(crate) minus: Option<Punct>,
}

impl Roles {
    fn resolve(table: &PunctuationTable) -> Self {
        Self {
            double_quote: table.classify(b'"'),
            single_quote: table.classify(b'\''),
            period: table.classify(b'.'),
            minus: table.classify(b'-'),
        }
    }
}

/// Whether `punc` is present and plays `role`.
#[inline]
pub(crate) fn is_role(punc: Option<Punct>, role: Option<Punct>) -> bool {
    matches!((punc, role), (Some(a), Some(b)) if a == b)
}

/// Space, tab, carriage return or line feed.
#[inline]
pub(crate) fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Single-pass scanner over a borrowed byte buffer.
///
/// The scanner produces one token per [`Scanner::next_token`] call into a
/// caller-owned [`Token`]. A `false` return either means the input is
/// exhausted ([`Scanner::at_end`]) or that a malformed literal was found,
/// in which case [`Scanner::error`] holds the first error message.
///
/// # Example
///
/// ```
/// use luffa_lex::{OwnedToken, Punct, Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("config", b"width = 640; // pixels");
/// let mut token = OwnedToken::new();
///
/// assert!(scanner.expect_name_eq("width", &mut token));
/// assert!(scanner.expect_punctuation_eq(Punct::EQUALS, &mut token));
/// assert_eq!(scanner.expect_integer(&mut token), Some(640));
/// assert!(scanner.expect_punctuation_eq(Punct::SEMICOLON, &mut token));
/// assert!(!scanner.next_token(&mut token));
/// assert!(scanner.at_end());
/// assert!(!scanner.had_error());
/// ```
pub struct Scanner<'src, C: CommentSyntax = CStyleComments> {
    /// Position state over the source buffer.
    pub(crate) cursor: Cursor<'src>,

    /// Comment start and end predicates.
    pub(crate) comments: C,

    pub(crate) table: PunctuationTable,
    pub(crate) roles: Roles,
    pub(crate) flags: ScanFlags,

    /// Display name used as the prefix of error messages.
    pub(crate) name: String,

    pub(crate) file_index: Option<FileIndex>,

    /// Optional collector for reported errors.
    pub(crate) handler: Option<&'src Handler>,

    /// First error reported over the scanner's lifetime.
    pub(crate) first_error: Option<String>,

    /// Error reported during the most recent scan call, if any.
    pub(crate) last_error: Option<String>,
}

impl<'src> Scanner<'src, CStyleComments> {
    /// Creates a scanner with C-style comments and default options.
    pub fn new(name: impl Into<String>, source: &'src [u8]) -> Self {
        Self::with_options(name, source, ScanOptions::default(), CStyleComments)
    }
}

impl<'src, C: CommentSyntax> Scanner<'src, C> {
    /// Creates a scanner with explicit options and comment syntax.
    ///
    /// ```
    /// use luffa_lex::{LuaComments, OwnedToken, ScanOptions, Scanner};
    ///
    /// let mut scanner = Scanner::with_options(
    ///     "init.lua",
    ///     b"-- header\nlocal",
    ///     ScanOptions::default(),
    ///     LuaComments,
    /// );
    /// let mut token = OwnedToken::new();
    /// assert!(scanner.expect_name_eq("local", &mut token));
    /// assert_eq!(token.line(), 1);
    /// ```
    pub fn with_options(
        name: impl Into<String>,
        source: &'src [u8],
        options: ScanOptions,
        comments: C,
    ) -> Self {
        let table = match &options.punctuation {
            Some(set) => PunctuationTable::new(set),
            None => PunctuationTable::default(),
        };
        let roles = Roles::resolve(&table);
        let name = name.into();
        tracing::trace!(
            target: "luffa_lex",
            name = %name,
            len = source.len(),
            flags = ?options.flags,
            "scanner created"
        );
        Self {
            cursor: Cursor::new(source),
            comments,
            table,
            roles,
            flags: options.flags,
            name,
            file_index: options.file_index,
            handler: None,
            first_error: None,
            last_error: None,
        }
    }

    /// Also forward every reported error to `handler`.
    pub fn with_handler(mut self, handler: &'src Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Scans the next token into `token`.
    ///
    /// The token is cleared first. Returns `false` when no token was
    /// produced: check [`Scanner::had_error`] / [`Scanner::at_end`] to tell
    /// a malformed literal from exhausted input.
    pub fn next_token<S: TokenText>(&mut self, token: &mut Token<S>) -> bool {
        self.last_error = None;
        token.clear();
        token.set_file_index(self.file_index);

        self.skip_whitespace_and_comments();

        let Some(current) = self.cursor.current() else {
            return false;
        };
        let punc = self.table.classify(current);

        if let Some(quote) = punc {
            if is_role(punc, self.roles.double_quote) || is_role(punc, self.roles.single_quote) {
                return self.scan_string(quote, token);
            }
        }

        if self.starts_number(current, punc) {
            return self.scan_number(token);
        }

        if let Some(punct) = punc {
            let position = self.cursor.location();
            self.cursor.advance();
            token.fill(TokenKind::Punctuation, Subtype::Punct(punct), &[current], position);
            return true;
        }

        self.scan_name(token)
    }

    /// Scans the next token without consuming it.
    ///
    /// Position state is restored whether or not a token was produced.
    pub fn peek_token<S: TokenText>(&mut self, token: &mut Token<S>) -> bool {
        let snapshot = self.cursor.snapshot();
        let found = self.next_token(token);
        self.cursor.restore(snapshot);
        found
    }

    /// A number starts with a digit, with a minus followed by a digit or
    /// period, or with a period followed by a digit. Digits that are in the
    /// punctuation set are punctuation and never start a number.
    fn starts_number(&self, current: u8, punc: Option<Punct>) -> bool {
        if self.is_number_digit(current) {
            return true;
        }
        let Some(next) = self.cursor.peek(1) else {
            return false;
        };
        if is_role(punc, self.roles.minus) {
            return self.is_number_digit(next)
                || is_role(self.table.classify(next), self.roles.period);
        }
        is_role(punc, self.roles.period) && self.is_number_digit(next)
    }

    /// An ASCII digit that the active punctuation set does not claim.
    #[inline]
    fn is_number_digit(&self, byte: u8) -> bool {
        byte.is_ascii_digit() && !self.table.is_punctuation(byte)
    }

    /// Comment kind starting at the cursor.
    pub(crate) fn comment_at_cursor(&self) -> CommentKind {
        match self.cursor.current() {
            Some(current) => self
                .comments
                .detect_start(self.flags, current, self.cursor.peek(1)),
            None => CommentKind::None,
        }
    }

    /// Whether the input is exhausted.
    pub fn at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Current zero-based line.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current cursor location.
    pub fn position(&self) -> Position {
        self.cursor.location()
    }

    /// Display name used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File index stamped on every token.
    pub fn file_index(&self) -> Option<FileIndex> {
        self.file_index
    }

    /// Behaviour switches the scanner was built with.
    pub fn flags(&self) -> ScanFlags {
        self.flags
    }

    /// Active punctuation table.
    pub fn punctuation(&self) -> &PunctuationTable {
        &self.table
    }

    /// Comment syntax in use.
    pub fn comments(&self) -> &C {
        &self.comments
    }
}

impl<'src, C: CommentSyntax> Iterator for Scanner<'src, C> {
    type Item = OwnedToken;

    /// Yields tokens until the input is exhausted or the first error.
    fn next(&mut self) -> Option<Self::Item> {
        let mut token = OwnedToken::new();
        self.next_token(&mut token).then_some(token)
    }
}
