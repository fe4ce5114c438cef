//! Pluggable comment recognition.
//!
//! A comment syntax is a pair of predicates looking at the current byte and
//! the one after it. The scanner calls [`CommentSyntax::detect_start`] between
//! tokens and at name and number boundaries; once a comment has started, it
//! steps over the opener and calls [`CommentSyntax::is_end`] on each following
//! byte. Predicates are never consulted inside quoted strings.
//!
//! `next` is `None` when the current byte is the last one in the buffer.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseCommentStyleError;
use crate::options::ScanFlags;

/// What kind of comment starts at the cursor, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CommentKind {
    #[default]
    None,
    /// Runs to the end of the line.
    Line,
    /// Runs to an explicit closer.
    Block,
    /// Single-character line comment.
    Hash,
}

/// Start and end detection for one comment syntax.
pub trait CommentSyntax {
    fn detect_start(&self, flags: ScanFlags, cur: u8, next: Option<u8>) -> CommentKind;

    /// Whether `kind` ends at `cur`. Called with `CommentKind::None` it
    /// reports the comment as already ended.
    fn is_end(&self, flags: ScanFlags, kind: CommentKind, cur: u8, next: Option<u8>) -> bool;

    /// Bytes of the opener stepped over before end detection starts.
    fn opener_len(&self, kind: CommentKind) -> usize {
        match kind {
            CommentKind::None => 0,
            CommentKind::Hash => 1,
            CommentKind::Line | CommentKind::Block => 2,
        }
    }

    /// Bytes of the closer consumed together with the comment. Line comments
    /// stop at their newline and leave it for whitespace skipping.
    fn closer_len(&self, kind: CommentKind) -> usize {
        match kind {
            CommentKind::Block => 2,
            _ => 0,
        }
    }
}

/// `# ...`, `// ...` and `/* ... */`.
///
/// # Example
///
/// ```
/// use luffa_lex::{CStyleComments, CommentKind, CommentSyntax, ScanFlags};
///
/// let c = CStyleComments;
/// let flags = ScanFlags::empty();
/// assert_eq!(c.detect_start(flags, b'/', Some(b'*')), CommentKind::Block);
/// assert_eq!(c.detect_start(flags, b'/', Some(b'x')), CommentKind::None);
/// assert!(c.is_end(flags, CommentKind::Block, b'*', Some(b'/')));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CStyleComments;

impl CommentSyntax for CStyleComments {
    fn detect_start(&self, _flags: ScanFlags, cur: u8, next: Option<u8>) -> CommentKind {
        match (cur, next) {
            (b'#', _) => CommentKind::Hash,
            (b'/', Some(b'/')) => CommentKind::Line,
            (b'/', Some(b'*')) => CommentKind::Block,
            _ => CommentKind::None,
        }
    }

    fn is_end(&self, _flags: ScanFlags, kind: CommentKind, cur: u8, next: Option<u8>) -> bool {
        match kind {
            CommentKind::None => true,
            CommentKind::Line | CommentKind::Hash => cur == b'\n',
            CommentKind::Block => cur == b'*' && next == Some(b'/'),
        }
    }
}

/// `-- ...` and `[[ ... ]]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LuaComments;

impl CommentSyntax for LuaComments {
    fn detect_start(&self, _flags: ScanFlags, cur: u8, next: Option<u8>) -> CommentKind {
        match (cur, next) {
            (b'-', Some(b'-')) => CommentKind::Line,
            (b'[', Some(b'[')) => CommentKind::Block,
            _ => CommentKind::None,
        }
    }

    fn is_end(&self, _flags: ScanFlags, kind: CommentKind, cur: u8, next: Option<u8>) -> bool {
        match kind {
            CommentKind::None => true,
            CommentKind::Line | CommentKind::Hash => cur == b'\n',
            CommentKind::Block => cur == b']' && next == Some(b']'),
        }
    }
}

/// No comments at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoComments;

impl CommentSyntax for NoComments {
    fn detect_start(&self, _flags: ScanFlags, _cur: u8, _next: Option<u8>) -> CommentKind {
        CommentKind::None
    }

    fn is_end(&self, _flags: ScanFlags, _kind: CommentKind, _cur: u8, _next: Option<u8>) -> bool {
        true
    }
}

/// Comment syntax built from two caller-supplied predicates.
///
/// Opener and closer lengths follow the trait defaults: one byte for
/// [`CommentKind::Hash`], two for the others, and a two-byte block closer.
///
/// # Example
///
/// ```
/// use luffa_lex::{CommentFns, CommentKind, CommentSyntax, ScanFlags};
///
/// // `;` line comments, as in assembler listings
/// let asm = CommentFns::new(
///     |_, cur, _| if cur == b';' { CommentKind::Hash } else { CommentKind::None },
///     |_, _, cur, _| cur == b'\n',
/// );
/// assert_eq!(asm.detect_start(ScanFlags::empty(), b';', None), CommentKind::Hash);
/// ```
#[derive(Clone, Copy)]
pub struct CommentFns<S, E> {
    start: S,
    end: E,
}

impl<S, E> CommentFns<S, E>
where
    S: Fn(ScanFlags, u8, Option<u8>) -> CommentKind,
    E: Fn(ScanFlags, CommentKind, u8, Option<u8>) -> bool,
{
    pub fn new(start: S, end: E) -> Self {
        Self { start, end }
    }
}

impl<S, E> CommentSyntax for CommentFns<S, E>
where
    S: Fn(ScanFlags, u8, Option<u8>) -> CommentKind,
    E: Fn(ScanFlags, CommentKind, u8, Option<u8>) -> bool,
{
    fn detect_start(&self, flags: ScanFlags, cur: u8, next: Option<u8>) -> CommentKind {
        (self.start)(flags, cur, next)
    }

    fn is_end(&self, flags: ScanFlags, kind: CommentKind, cur: u8, next: Option<u8>) -> bool {
        if kind == CommentKind::None {
            return true;
        }
        (self.end)(flags, kind, cur, next)
    }
}

impl<S, E> fmt::Debug for CommentFns<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommentFns").finish_non_exhaustive()
    }
}

/// Built-in comment syntaxes selectable at runtime, e.g. from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    #[default]
    C,
    Lua,
    None,
}

impl CommentSyntax for CommentStyle {
    fn detect_start(&self, flags: ScanFlags, cur: u8, next: Option<u8>) -> CommentKind {
        match self {
            CommentStyle::C => CStyleComments.detect_start(flags, cur, next),
            CommentStyle::Lua => LuaComments.detect_start(flags, cur, next),
            CommentStyle::None => NoComments.detect_start(flags, cur, next),
        }
    }

    fn is_end(&self, flags: ScanFlags, kind: CommentKind, cur: u8, next: Option<u8>) -> bool {
        match self {
            CommentStyle::C => CStyleComments.is_end(flags, kind, cur, next),
            CommentStyle::Lua => LuaComments.is_end(flags, kind, cur, next),
            CommentStyle::None => NoComments.is_end(flags, kind, cur, next),
        }
    }
}

impl FromStr for CommentStyle {
    type Err = ParseCommentStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(CommentStyle::C),
            "lua" => Ok(CommentStyle::Lua),
            "none" => Ok(CommentStyle::None),
            _ => Err(ParseCommentStyleError(s.to_string())),
        }
    }
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentStyle::C => write!(f, "c"),
            CommentStyle::Lua => write!(f, "lua"),
            CommentStyle::None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_FLAGS: ScanFlags = ScanFlags::empty();

    #[test]
    fn test_c_style_detection() {
        let c = CStyleComments;
        assert_eq!(c.detect_start(NO_FLAGS, b'#', None), CommentKind::Hash);
        assert_eq!(c.detect_start(NO_FLAGS, b'/', Some(b'/')), CommentKind::Line);
        assert_eq!(c.detect_start(NO_FLAGS, b'/', None), CommentKind::None);
        assert_eq!(c.detect_start(NO_FLAGS, b'-', Some(b'-')), CommentKind::None);
    }

    #[test]
    fn test_c_style_ends() {
        let c = CStyleComments;
        assert!(c.is_end(NO_FLAGS, CommentKind::Line, b'\n', None));
        assert!(c.is_end(NO_FLAGS, CommentKind::Hash, b'\n', Some(b'x')));
        assert!(!c.is_end(NO_FLAGS, CommentKind::Block, b'\n', None));
        assert!(!c.is_end(NO_FLAGS, CommentKind::Block, b'*', None));
        assert!(c.is_end(NO_FLAGS, CommentKind::None, b'a', None));
    }

    #[test]
    fn test_lua_detection() {
        let lua = LuaComments;
        assert_eq!(lua.detect_start(NO_FLAGS, b'-', Some(b'-')), CommentKind::Line);
        assert_eq!(lua.detect_start(NO_FLAGS, b'[', Some(b'[')), CommentKind::Block);
        assert_eq!(lua.detect_start(NO_FLAGS, b'-', Some(b'1')), CommentKind::None);
        assert_eq!(lua.detect_start(NO_FLAGS, b'#', None), CommentKind::None);
        assert!(lua.is_end(NO_FLAGS, CommentKind::Block, b']', Some(b']')));
    }

    #[test]
    fn test_lengths() {
        let c = CStyleComments;
        assert_eq!(c.opener_len(CommentKind::Hash), 1);
        assert_eq!(c.opener_len(CommentKind::Block), 2);
        assert_eq!(c.closer_len(CommentKind::Block), 2);
        assert_eq!(c.closer_len(CommentKind::Line), 0);
    }

    #[test]
    fn test_comment_fns_guard_none() {
        let fns = CommentFns::new(|_, _, _| CommentKind::None, |_, _, _, _| false);
        assert!(fns.is_end(NO_FLAGS, CommentKind::None, b'x', None));
    }

    #[test]
    fn test_comment_style_parse() {
        assert_eq!("lua".parse::<CommentStyle>().unwrap(), CommentStyle::Lua);
        assert_eq!("C".parse::<CommentStyle>().unwrap(), CommentStyle::C);
        assert_eq!("none".parse::<CommentStyle>().unwrap(), CommentStyle::None);
        assert!("pascal".parse::<CommentStyle>().is_err());
        assert_eq!(CommentStyle::Lua.to_string(), "lua");
    }
}
