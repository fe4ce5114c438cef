//! luffa-lex - Configurable single-pass scanner
//!
//! This crate turns a byte buffer into a stream of classified tokens:
//! names, quoted strings, numbers and single-character punctuation. Each
//! token carries its line, line offset and byte offset. Comment syntax and
//! the punctuation set are chosen per scanner.
//!
//! # Example Usage
//!
//! ```
//! use luffa_lex::{OwnedToken, Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("example", b"print(\"hi\") # greet");
//! let mut token = OwnedToken::new();
//!
//! let mut kinds = Vec::new();
//! while scanner.next_token(&mut token) {
//!     kinds.push(token.kind());
//! }
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Name, TokenKind::Punctuation, TokenKind::String, TokenKind::Punctuation]
//! );
//! assert!(scanner.at_end() && !scanner.had_error());
//! ```
//!
//! # Module Structure
//!
//! - [`scanner`] - the scanner and its lexeme families
//! - [`token`] - token kinds and text storage
//! - [`punctuation`] - byte to punctuation ordinal table
//! - [`comment`] - comment syntaxes
//! - [`cursor`] - byte cursor with line tracking
//! - [`numeric`] - conversion of number text
//!
//! # Token Categories
//!
//! - **Punctuation**: any single byte from the active set. The default set
//!   is ``!~.,=?<>:;()[]{}|/\+-*&^%$#@"'``.
//! - **String**: text between matching `"` or `'` quotes, no escapes.
//! - **Number**: digits with an optional leading `-`, one `.`, `e`/`E`
//!   exponent markers and an `f`/`l` suffix.
//! - **Name**: any other run of bytes up to whitespace, punctuation or a
//!   comment.
//!
//! # Lexical Ambiguities
//!
//! - `-` starts a number only when followed by a digit or `.`.
//! - `.` starts a number only when followed by a digit.
//! - Comment markers inside strings are part of the string.

pub mod comment;
pub mod cursor;
pub mod error;
pub mod numeric;
pub mod options;
pub mod punctuation;
pub mod scanner;
pub mod token;

mod edge_cases;

pub use comment::{
    CStyleComments, CommentFns, CommentKind, CommentStyle, CommentSyntax, LuaComments, NoComments,
};
pub use error::{LexError, ParseCommentStyleError};
pub use options::{ScanFlags, ScanOptions};
pub use punctuation::{Punct, PunctuationTable, DEFAULT_PUNCTUATION};
pub use scanner::Scanner;
pub use token::{
    InlineText, InlineToken, NumberKind, OwnedText, OwnedToken, Subtype, Token, TokenKind,
    TokenText,
};
