//! Error types for the scanner.
//!
//! Scanning never returns these directly: a malformed literal is formatted
//! into the scanner's first-error slot and the scan call returns `false`.
//! The `Display` text of [`LexError`] is the message body that follows the
//! `name(line) : ` prefix.

use thiserror::Error;

/// Malformed input found while producing a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A quote with no matching closing quote before the end of input.
    #[error("No closing quote found for open quote on line {line}, offset {offset}")]
    UnterminatedString { line: u32, offset: u32 },

    /// A numeric run with a second decimal point or a second minus sign.
    #[error("Invalid number format")]
    InvalidNumber,
}

/// Unknown name given for a built-in comment style.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown comment style '{0}' (expected c, lua or none)")]
pub struct ParseCommentStyleError(pub String);
