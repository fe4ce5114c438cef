//! Quoted string lexing.

use super::core::Scanner;
use crate::comment::CommentSyntax;
use crate::error::LexError;
use crate::punctuation::Punct;
use crate::token::{Subtype, Token, TokenKind, TokenText};

impl<'src, C: CommentSyntax> Scanner<'src, C> {
    /// Lexes a string opened by the quote under the cursor.
    ///
    /// The string runs to the next byte classified as the same quote.
    /// There are no escapes and newlines are allowed inside. The token text
    /// excludes both quotes; its position is that of the opening quote.
    pub(crate) fn scan_string<S: TokenText>(&mut self, quote: Punct, token: &mut Token<S>) -> bool {
        let open = self.cursor.location();
        self.cursor.advance();
        let start = self.cursor.position();

        while let Some(current) = self.cursor.current() {
            if self.table.classify(current) == Some(quote) {
                let text = self.cursor.slice_from(start);
                token.fill(TokenKind::String, Subtype::Punct(quote), text, open);
                self.cursor.advance();
                return true;
            }
            self.cursor.advance();
        }

        self.report(LexError::UnterminatedString {
            line: open.line,
            offset: open.line_offset,
        })
    }
}
