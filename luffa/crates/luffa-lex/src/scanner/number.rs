//! Number literal lexing.

use super::core::{is_blank, is_role, Scanner};
use crate::comment::{CommentKind, CommentSyntax};
use crate::error::LexError;
use crate::token::{NumberKind, Subtype, Token, TokenKind, TokenText};

impl<'src, C: CommentSyntax> Scanner<'src, C> {
    /// Lexes a number starting at the cursor.
    ///
    /// The run ends at whitespace, at a comment start, at punctuation other
    /// than period or minus, or at any other non-digit. Suffixes `f`, `F`,
    /// `l` and `L` are consumed and end the run; `e` and `E` are consumed
    /// and scanning continues. A period makes the number a float. A second
    /// period or a second minus is an error.
    pub(crate) fn scan_number<S: TokenText>(&mut self, token: &mut Token<S>) -> bool {
        let position = self.cursor.location();
        let start = self.cursor.position();
        let mut kind = NumberKind::Integer;
        let mut periods = 0;
        let mut minuses = 0;

        while let Some(current) = self.cursor.current() {
            if is_blank(current) || self.comment_at_cursor() != CommentKind::None {
                break;
            }
            match current {
                b'f' | b'F' | b'l' | b'L' => {
                    self.cursor.advance();
                    break;
                }
                b'e' | b'E' => {
                    self.cursor.advance();
                    continue;
                }
                _ => {}
            }

            let punc = self.table.classify(current);
            if is_role(punc, self.roles.period) {
                kind = NumberKind::Float;
                periods += 1;
                if periods > 1 {
                    self.cursor.advance();
                    return self.report(LexError::InvalidNumber);
                }
            } else if is_role(punc, self.roles.minus) {
                minuses += 1;
                if minuses > 1 {
                    self.cursor.advance();
                    return self.report(LexError::InvalidNumber);
                }
            } else if punc.is_some() || !current.is_ascii_digit() {
                break;
            }
            self.cursor.advance();
        }

        if self.cursor.position() == start {
            return false;
        }
        let text = self.cursor.slice_from(start);
        token.fill(TokenKind::Number, Subtype::Number(kind), text, position);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{CStyleComments, NumberKind, OwnedToken, ScanOptions, Scanner, TokenKind};

    fn numbers(source: &[u8]) -> Vec<(Vec<u8>, Option<NumberKind>)> {
        Scanner::new("test", source)
            .map(|t| (t.text().to_vec(), t.number_kind()))
            .collect()
    }

    fn fails(source: &[u8]) -> bool {
        let mut scanner = Scanner::new("test", source);
        let mut token = OwnedToken::new();
        while scanner.next_token(&mut token) {}
        scanner.had_error()
    }

    #[test]
    fn test_integer() {
        assert_eq!(numbers(b"123"), vec![(b"123".to_vec(), Some(NumberKind::Integer))]);
    }

    #[test]
    fn test_negative_integer() {
        assert_eq!(numbers(b"-123"), vec![(b"-123".to_vec(), Some(NumberKind::Integer))]);
    }

    #[test]
    fn test_leading_period_float() {
        assert_eq!(numbers(b".5"), vec![(b".5".to_vec(), Some(NumberKind::Float))]);
    }

    #[test]
    fn test_float_suffix_consumed() {
        let tokens: Vec<_> = Scanner::new("test", b"1.5f;").collect();
        assert_eq!(tokens[0].text(), b"1.5f");
        assert_eq!(tokens[1].kind(), TokenKind::Punctuation);
    }

    #[test]
    fn test_long_suffix_on_integer() {
        assert_eq!(numbers(b"10L"), vec![(b"10L".to_vec(), Some(NumberKind::Integer))]);
    }

    #[test]
    fn test_exponent_with_sign() {
        assert_eq!(numbers(b"1.5e-3"), vec![(b"1.5e-3".to_vec(), Some(NumberKind::Float))]);
    }

    #[test]
    fn test_exponent_not_validated() {
        assert_eq!(numbers(b"2e"), vec![(b"2e".to_vec(), Some(NumberKind::Integer))]);
    }

    #[test]
    fn test_ends_at_punctuation() {
        let tokens: Vec<_> = Scanner::new("test", b"42)").collect();
        assert_eq!(tokens[0].text(), b"42");
        assert_eq!(tokens[1].text(), b")");
    }

    #[test]
    fn test_ends_at_letter() {
        let tokens: Vec<_> = Scanner::new("test", b"12px").collect();
        assert_eq!(tokens[0].text(), b"12");
        assert_eq!(tokens[1].text(), b"px");
        assert_eq!(tokens[1].kind(), TokenKind::Name);
    }

    #[test]
    fn test_ends_at_comment() {
        let tokens: Vec<_> = Scanner::new("test", b"7// seven").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text(), b"7");
    }

    #[test]
    fn test_embedded_minus_is_one_token() {
        assert_eq!(numbers(b"3-4"), vec![(b"3-4".to_vec(), Some(NumberKind::Integer))]);
    }

    #[test]
    fn test_two_periods_is_error() {
        assert!(fails(b"1.2.3"));
    }

    #[test]
    fn test_two_minuses_is_error() {
        assert!(fails(b"1--2"));
        assert!(fails(b"-1-2"));
    }

    #[test]
    fn test_error_message() {
        let mut scanner = Scanner::new("nums", b"\n1.2.3");
        let mut token = OwnedToken::new();
        assert!(!scanner.next_token(&mut token));
        assert_eq!(scanner.error(), Some("nums(1) : Invalid number format"));
        assert!(!scanner.at_end());
    }

    #[test]
    fn test_digits_in_punctuation_set_are_punctuation() {
        let options = ScanOptions::default().punctuation(b"0123456789;");
        let mut scanner = Scanner::with_options("test", b"7;", options, CStyleComments);
        let mut token = OwnedToken::new();

        assert!(scanner.next_token(&mut token));
        assert_eq!(token.kind(), TokenKind::Punctuation);
        assert_eq!(token.text(), b"7");
        assert_eq!(token.byte_offset(), 0);

        assert!(scanner.next_token(&mut token));
        assert_eq!(token.text(), b";");
        assert_eq!(token.byte_offset(), 1);

        assert!(!scanner.next_token(&mut token));
        assert!(scanner.at_end());
        assert!(!scanner.had_error());
    }

    #[test]
    fn test_minus_before_claimed_digit_is_punctuation() {
        let options = ScanOptions::default().punctuation(b"-7");
        let tokens: Vec<_> =
            Scanner::with_options("test", b"-7 -8", options, CStyleComments).collect();
        let texts: Vec<_> = tokens.iter().map(|t| t.text().to_vec()).collect();
        assert_eq!(texts, [b"-".to_vec(), b"7".to_vec(), b"-8".to_vec()]);
        assert_eq!(tokens[0].kind(), TokenKind::Punctuation);
        assert_eq!(tokens[2].number_kind(), Some(NumberKind::Integer));
    }
}
