//! Whitespace and comment skipping.

use super::core::{is_blank, Scanner};
use crate::comment::{CommentKind, CommentSyntax};

impl<'src, C: CommentSyntax> Scanner<'src, C> {
    /// Skips whitespace and comments until a token byte or the end of input.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            let skipped_blank = self.skip_blanks();
            let skipped_comment = self.skip_comment();
            if !(skipped_blank || skipped_comment) || self.cursor.is_at_end() {
                break;
            }
        }
    }

    fn skip_blanks(&mut self) -> bool {
        let start = self.cursor.position();
        while self.cursor.current().is_some_and(is_blank) {
            self.cursor.advance();
        }
        self.cursor.position() != start
    }

    /// Skips one comment if one starts at the cursor. An unclosed comment
    /// runs to the end of input.
    fn skip_comment(&mut self) -> bool {
        let kind = self.comment_at_cursor();
        if kind == CommentKind::None {
            return false;
        }
        self.cursor.advance_by(self.comments.opener_len(kind));

        while let Some(current) = self.cursor.current() {
            if self
                .comments
                .is_end(self.flags, kind, current, self.cursor.peek(1))
            {
                self.cursor.advance_by(self.comments.closer_len(kind));
                break;
            }
            self.cursor.advance();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{LuaComments, OwnedToken, ScanOptions, Scanner, TokenKind};

    #[test]
    fn test_line_comment_counts_newline() {
        let mut scanner = Scanner::new("test", b"a // b\nc");
        let mut token = OwnedToken::new();
        assert!(scanner.next_token(&mut token));
        assert_eq!(token.text(), b"a");
        assert!(scanner.next_token(&mut token));
        assert_eq!(token.text(), b"c");
        assert_eq!(token.line(), 1);
        assert_eq!(token.line_offset(), 0);
    }

    #[test]
    fn test_block_comment_consumes_closer() {
        let tokens: Vec<_> = Scanner::new("test", b"a /* x\ny */ b").collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text(), b"b");
        assert_eq!(tokens[1].line(), 1);
        assert_eq!(tokens[1].line_offset(), 5);
    }

    #[test]
    fn test_block_opener_does_not_close_itself() {
        let tokens: Vec<_> = Scanner::new("test", b"/*/ still comment */ x").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text(), b"x");
    }

    #[test]
    fn test_consecutive_comments() {
        let tokens: Vec<_> = Scanner::new("test", b"# one\n// two\n/* three */\nlast").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].line(), 3);
    }

    #[test]
    fn test_unclosed_block_runs_to_end() {
        let mut scanner = Scanner::new("test", b"a /* never closed");
        let mut token = OwnedToken::new();
        assert!(scanner.next_token(&mut token));
        assert!(!scanner.next_token(&mut token));
        assert!(scanner.at_end());
        assert!(!scanner.had_error());
    }

    #[test]
    fn test_comment_at_end_without_newline() {
        let tokens: Vec<_> = Scanner::new("test", b"x # trailing").collect();
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_lua_comments() {
        let source = b"local a -- note\n[[ block\n]] b";
        let tokens: Vec<_> =
            Scanner::with_options("t.lua", source, ScanOptions::default(), LuaComments).collect();
        let texts: Vec<&[u8]> = tokens.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec![&b"local"[..], &b"a"[..], &b"b"[..]]);
        assert_eq!(tokens[2].line(), 2);
        assert!(tokens.iter().all(|t| t.kind() == TokenKind::Name));
    }
}
