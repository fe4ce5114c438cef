//! Typed expectations on top of `next_token`.
//!
//! Each expectation consumes one token. The plain form returns a bool or an
//! `Option` and reports nothing. The `_with` form additionally describes
//! the failure to an [`ErrorSink`].

use luffa_util::ErrorSink;

use super::core::Scanner;
use crate::comment::CommentSyntax;
use crate::numeric;
use crate::options::ScanFlags;
use crate::punctuation::Punct;
use crate::token::{NumberKind, Token, TokenKind, TokenText};

impl<'src, C: CommentSyntax> Scanner<'src, C> {
    /// Like [`Scanner::next_token`], but forwards an error raised by this
    /// call to `sink`. Running out of input is not an error.
    pub fn next_token_with<S: TokenText>(
        &mut self,
        token: &mut Token<S>,
        sink: &mut dyn ErrorSink,
    ) -> bool {
        if self.next_token(token) {
            return true;
        }
        if let Some(message) = self.last_error.as_deref() {
            sink.error(message);
        }
        false
    }

    /// Like [`Scanner::peek_token`], reporting a failure that is not plain
    /// exhaustion of the input.
    pub fn peek_token_with<S: TokenText>(
        &mut self,
        token: &mut Token<S>,
        sink: &mut dyn ErrorSink,
    ) -> bool {
        if self.peek_token(token) {
            return true;
        }
        if self.last_error.is_some() {
            sink.error("Failed to peek next token.");
        }
        false
    }

    pub fn expect_name<S: TokenText>(&mut self, token: &mut Token<S>) -> bool {
        self.next_token(token) && token.kind() == TokenKind::Name
    }

    pub fn expect_name_with<S: TokenText>(
        &mut self,
        token: &mut Token<S>,
        sink: &mut dyn ErrorSink,
    ) -> bool {
        if self.expect_name(token) {
            return true;
        }
        sink.error(&format!("Expected a name, got a {}.", token.kind()));
        false
    }

    /// Expects a name equal to `text`, ignoring ASCII case when the scanner
    /// was built with [`ScanFlags::IGNORE_CASE`].
    pub fn expect_name_eq<S: TokenText>(&mut self, text: &str, token: &mut Token<S>) -> bool {
        if !self.expect_name(token) {
            return false;
        }
        if self.flags.contains(ScanFlags::IGNORE_CASE) {
            token.text().eq_ignore_ascii_case(text.as_bytes())
        } else {
            token.text() == text.as_bytes()
        }
    }

    pub fn expect_name_eq_with<S: TokenText>(
        &mut self,
        text: &str,
        token: &mut Token<S>,
        sink: &mut dyn ErrorSink,
    ) -> bool {
        if self.expect_name_eq(text, token) {
            return true;
        }
        sink.error(&format!(
            "Expected name '{}', got '{}'.",
            text,
            token.text_lossy()
        ));
        false
    }

    /// Expects a number and converts it to `f64`.
    pub fn expect_double<S: TokenText>(&mut self, token: &mut Token<S>) -> Option<f64> {
        if !self.next_token(token) || token.kind() != TokenKind::Number {
            return None;
        }
        numeric::parse_f64(token.text())
    }

    pub fn expect_double_with<S: TokenText>(
        &mut self,
        token: &mut Token<S>,
        sink: &mut dyn ErrorSink,
    ) -> Option<f64> {
        let value = self.expect_double(token);
        if value.is_none() {
            sink.error(&format!("Expected double, got '{}'.", token.kind()));
        }
        value
    }

    /// Expects a number and converts it to `f32`.
    pub fn expect_float<S: TokenText>(&mut self, token: &mut Token<S>) -> Option<f32> {
        if !self.next_token(token) || token.kind() != TokenKind::Number {
            return None;
        }
        numeric::parse_f32(token.text())
    }

    pub fn expect_float_with<S: TokenText>(
        &mut self,
        token: &mut Token<S>,
        sink: &mut dyn ErrorSink,
    ) -> Option<f32> {
        let value = self.expect_float(token);
        if value.is_none() {
            sink.error(&format!("Expected float, got '{}'.", token.kind()));
        }
        value
    }

    /// Expects an integer number (no decimal point) and converts it to
    /// `i32`, saturating out-of-range values.
    pub fn expect_integer<S: TokenText>(&mut self, token: &mut Token<S>) -> Option<i32> {
        if !self.next_token(token) || token.number_kind() != Some(NumberKind::Integer) {
            return None;
        }
        numeric::parse_i32(token.text())
    }

    pub fn expect_integer_with<S: TokenText>(
        &mut self,
        token: &mut Token<S>,
        sink: &mut dyn ErrorSink,
    ) -> Option<i32> {
        let value = self.expect_integer(token);
        if value.is_none() {
            sink.error(&format!("Expected integer, got {}.", token.kind()));
        }
        value
    }

    /// Expects any punctuation and returns its ordinal.
    pub fn expect_punctuation<S: TokenText>(&mut self, token: &mut Token<S>) -> Option<Punct> {
        if !self.next_token(token) || token.kind() != TokenKind::Punctuation {
            return None;
        }
        token.punct()
    }

    pub fn expect_punctuation_with<S: TokenText>(
        &mut self,
        token: &mut Token<S>,
        sink: &mut dyn ErrorSink,
    ) -> Option<Punct> {
        let punct = self.expect_punctuation(token);
        if punct.is_none() {
            sink.error(&format!("Expected punctuation, got {}.", token.kind()));
        }
        punct
    }

    /// Expects the punctuation with ordinal `punct`.
    pub fn expect_punctuation_eq<S: TokenText>(&mut self, punct: Punct, token: &mut Token<S>) -> bool {
        self.expect_punctuation(token) == Some(punct)
    }

    pub fn expect_punctuation_eq_with<S: TokenText>(
        &mut self,
        punct: Punct,
        token: &mut Token<S>,
        sink: &mut dyn ErrorSink,
    ) -> bool {
        if self.expect_punctuation_eq(punct, token) {
            return true;
        }
        let message = match token.punct().filter(|_| token.kind() == TokenKind::Punctuation) {
            Some(got) => format!(
                "Expected punctuation '{}', got '{}'",
                self.punct_char(punct),
                self.punct_char(got)
            ),
            None => format!("Expected punctuation, got {}.", token.kind()),
        };
        sink.error(&message);
        false
    }

    fn punct_char(&self, punct: Punct) -> char {
        self.table.byte_of(punct).map(char::from).unwrap_or('?')
    }
}
