//! Punctuation classification.
//!
//! A [`PunctuationTable`] maps every byte value to the ordinal of that byte
//! within a configuration string, or to nothing. The ordinal is what ends up
//! in a punctuation token's subtype, so two scanners configured with
//! different sets may report different ordinals for the same character.

/// Default punctuation set. Index within this string is the ordinal.
pub const DEFAULT_PUNCTUATION: &[u8] = b"!~.,=?<>:;()[]{}|/\\+-*&^%$#@\"'";

/// Ordinal of a punctuation character within the active set.
///
/// The associated constants name the ordinals of [`DEFAULT_PUNCTUATION`].
///
/// # Example
///
/// ```
/// use luffa_lex::{Punct, PunctuationTable};
///
/// let table = PunctuationTable::default();
/// assert_eq!(table.classify(b'.'), Some(Punct::PERIOD));
/// assert_eq!(table.classify(b'"'), Some(Punct::QUOTE));
/// assert_eq!(table.classify(b'a'), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Punct(pub u16);

impl Punct {
    pub const EXCLAMATION: Punct = Punct(0);
    pub const TILDE: Punct = Punct(1);
    pub const PERIOD: Punct = Punct(2);
    pub const COMMA: Punct = Punct(3);
    pub const EQUALS: Punct = Punct(4);
    pub const QUESTION: Punct = Punct(5);
    pub const LESS: Punct = Punct(6);
    pub const GREATER: Punct = Punct(7);
    pub const COLON: Punct = Punct(8);
    pub const SEMICOLON: Punct = Punct(9);
    pub const PAREN_OPEN: Punct = Punct(10);
    pub const PAREN_CLOSE: Punct = Punct(11);
    pub const BRACKET_OPEN: Punct = Punct(12);
    pub const BRACKET_CLOSE: Punct = Punct(13);
    pub const BRACE_OPEN: Punct = Punct(14);
    pub const BRACE_CLOSE: Punct = Punct(15);
    pub const PIPE: Punct = Punct(16);
    pub const SLASH: Punct = Punct(17);
    pub const BACKSLASH: Punct = Punct(18);
    pub const PLUS: Punct = Punct(19);
    pub const MINUS: Punct = Punct(20);
    pub const ASTERISK: Punct = Punct(21);
    pub const AMPERSAND: Punct = Punct(22);
    pub const CARET: Punct = Punct(23);
    pub const PERCENT: Punct = Punct(24);
    pub const DOLLAR: Punct = Punct(25);
    pub const HASH: Punct = Punct(26);
    pub const AT: Punct = Punct(27);
    pub const QUOTE: Punct = Punct(28);
    pub const SINGLE_QUOTE: Punct = Punct(29);

    #[inline]
    pub fn ordinal(self) -> u16 {
        self.0
    }
}

/// 256-entry byte to ordinal lookup built from a configuration string.
#[derive(Clone, Debug)]
pub struct PunctuationTable {
    table: [Option<Punct>; 256],
    chars: Vec<u8>,
}

impl PunctuationTable {
    /// Builds the table. When a byte appears more than once in `set`, its
    /// first index wins. An empty set classifies nothing as punctuation.
    ///
    /// ```
    /// use luffa_lex::{Punct, PunctuationTable};
    ///
    /// let table = PunctuationTable::new(b"+-+");
    /// assert_eq!(table.classify(b'+'), Some(Punct(0)));
    /// assert_eq!(table.classify(b'-'), Some(Punct(1)));
    /// assert_eq!(table.classify(b'.'), None);
    /// ```
    pub fn new(set: &[u8]) -> Self {
        let mut table = [None; 256];
        for (index, &byte) in set.iter().enumerate() {
            let Ok(ordinal) = u16::try_from(index) else {
                break;
            };
            let slot = &mut table[usize::from(byte)];
            if slot.is_none() {
                *slot = Some(Punct(ordinal));
            }
        }
        Self {
            table,
            chars: set.to_vec(),
        }
    }

    #[inline]
    pub fn classify(&self, byte: u8) -> Option<Punct> {
        self.table[usize::from(byte)]
    }

    #[inline]
    pub fn is_punctuation(&self, byte: u8) -> bool {
        self.classify(byte).is_some()
    }

    /// Character an ordinal stands for in this set.
    pub fn byte_of(&self, punct: Punct) -> Option<u8> {
        self.chars.get(usize::from(punct.0)).copied()
    }

    /// Length of the configuration string the table was built from.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for PunctuationTable {
    fn default() -> Self {
        Self::new(DEFAULT_PUNCTUATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_ordinals() {
        let table = PunctuationTable::default();
        assert_eq!(table.len(), 30);
        assert_eq!(table.classify(b'!'), Some(Punct::EXCLAMATION));
        assert_eq!(table.classify(b'-'), Some(Punct::MINUS));
        assert_eq!(table.classify(b'\\'), Some(Punct::BACKSLASH));
        assert_eq!(table.classify(b'\''), Some(Punct::SINGLE_QUOTE));
        assert_eq!(table.classify(b'_'), None);
        assert_eq!(table.classify(b' '), None);
    }

    #[test]
    fn test_every_default_char_round_trips() {
        let table = PunctuationTable::default();
        for &byte in DEFAULT_PUNCTUATION {
            let punct = table.classify(byte).unwrap();
            assert_eq!(table.byte_of(punct), Some(byte));
        }
    }

    #[test]
    fn test_custom_set_reassigns_ordinals() {
        let table = PunctuationTable::new(b".;");
        assert_eq!(table.classify(b'.'), Some(Punct(0)));
        assert_eq!(table.classify(b';'), Some(Punct(1)));
        assert_eq!(table.classify(b'!'), None);
    }

    #[test]
    fn test_empty_set() {
        let table = PunctuationTable::new(b"");
        assert!(table.is_empty());
        assert!((0..=255u8).all(|b| !table.is_punctuation(b)));
    }

    #[test]
    fn test_high_bytes_are_classifiable() {
        let table = PunctuationTable::new(&[0xff, 0x00]);
        assert_eq!(table.classify(0xff), Some(Punct(0)));
        assert_eq!(table.classify(0x00), Some(Punct(1)));
    }

    #[test]
    fn test_byte_of_out_of_range() {
        let table = PunctuationTable::default();
        assert_eq!(table.byte_of(Punct(30)), None);
    }
}
