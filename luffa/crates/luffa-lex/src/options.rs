//! Scanner construction options.

use bitflags::bitflags;
use luffa_util::FileIndex;

bitflags! {
    /// Behaviour switches passed to the scanner and to comment predicates.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ScanFlags: u32 {
        /// Name comparisons in `expect_name_eq` ignore ASCII case.
        const IGNORE_CASE = 1 << 0;
        /// Punctuation does not end a name; only whitespace and comments do.
        const ALLOW_PUNCTUATION_IN_NAMES = 1 << 1;
    }
}

/// Everything a scanner needs besides its source and comment syntax.
///
/// # Example
///
/// ```
/// use luffa_lex::{ScanFlags, ScanOptions};
/// use luffa_util::FileIndex;
///
/// let options = ScanOptions::default()
///     .flags(ScanFlags::IGNORE_CASE)
///     .punctuation(b"(),;")
///     .file_index(FileIndex(2));
/// assert!(options.flags.contains(ScanFlags::IGNORE_CASE));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub flags: ScanFlags,
    /// Overrides the default punctuation set when present.
    pub punctuation: Option<Vec<u8>>,
    pub file_index: Option<FileIndex>,
}

impl ScanOptions {
    pub fn flags(mut self, flags: ScanFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn punctuation(mut self, set: impl Into<Vec<u8>>) -> Self {
        self.punctuation = Some(set.into());
        self
    }

    pub fn file_index(mut self, index: FileIndex) -> Self {
        self.file_index = Some(index);
        self
    }
}
