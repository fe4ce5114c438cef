//! Name lexing.

use super::core::{is_blank, Scanner};
use crate::comment::{CommentKind, CommentSyntax};
use crate::options::ScanFlags;
use crate::token::{Subtype, Token, TokenKind, TokenText};

impl<'src, C: CommentSyntax> Scanner<'src, C> {
    /// Lexes a name: everything up to whitespace, a comment start or, unless
    /// `ALLOW_PUNCTUATION_IN_NAMES` is set, a punctuation byte.
    pub(crate) fn scan_name<S: TokenText>(&mut self, token: &mut Token<S>) -> bool {
        let position = self.cursor.location();
        let start = self.cursor.position();
        let stop_at_punctuation = !self.flags.contains(ScanFlags::ALLOW_PUNCTUATION_IN_NAMES);

        while let Some(current) = self.cursor.current() {
            if is_blank(current)
                || self.comment_at_cursor() != CommentKind::None
                || (stop_at_punctuation && self.table.is_punctuation(current))
            {
                break;
            }
            self.cursor.advance();
        }

        if self.cursor.position() == start {
            return false;
        }
        let text = self.cursor.slice_from(start);
        token.fill(TokenKind::Name, Subtype::Unset, text, position);
        true
    }
}
