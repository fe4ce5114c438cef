//! Shared helpers for luffat commands.

use std::path::{Path, PathBuf};

use luffa_lex::{CommentStyle, PunctuationTable, ScanFlags, ScanOptions, Subtype, TokenKind};
use luffa_util::FileIndex;

use crate::config::ScannerConfig;
use crate::error::{LuffatError, Result};

// ============================================================================
// Scanner Settings
// ============================================================================

/// Scanner construction settings resolved from configuration and arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannerSettings {
    pub comments: CommentStyle,
    pub flags: ScanFlags,
    pub punctuation: Option<Vec<u8>>,
}

impl ScannerSettings {
    /// Resolve settings from the `[scanner]` section.
    ///
    /// A comment style given on the command line wins over the configured one.
    pub fn from_config(config: &ScannerConfig, comments: Option<CommentStyle>) -> Result<Self> {
        let comments = match comments {
            Some(style) => style,
            None => config
                .comments
                .parse()
                .map_err(|e| LuffatError::Config(format!("{}", e)))?,
        };

        let mut flags = ScanFlags::empty();
        if config.ignore_case {
            flags |= ScanFlags::IGNORE_CASE;
        }
        if config.allow_punctuation_in_names {
            flags |= ScanFlags::ALLOW_PUNCTUATION_IN_NAMES;
        }

        let punctuation = match &config.punctuation {
            Some(set) if set.is_empty() => {
                return Err(LuffatError::Config(
                    "punctuation set must not be empty".to_string(),
                ))
            }
            Some(set) => Some(set.as_bytes().to_vec()),
            None => None,
        };

        Ok(Self {
            comments,
            flags,
            punctuation,
        })
    }

    /// Options for scanning the file registered under `index`.
    pub fn options(&self, index: FileIndex) -> ScanOptions {
        let options = ScanOptions::default().flags(self.flags).file_index(index);
        match &self.punctuation {
            Some(set) => options.punctuation(set.clone()),
            None => options,
        }
    }
}

// ============================================================================
// Token Formatting
// ============================================================================

/// Short description of a token's subtype.
///
/// Punctuation and strings show the punctuation byte they refer to.
pub fn describe_subtype(kind: TokenKind, subtype: Subtype, table: &PunctuationTable) -> String {
    match subtype {
        Subtype::Unset => "-".to_string(),
        Subtype::Number(number) => format!("{:?}", number).to_lowercase(),
        Subtype::Punct(punct) => match table.byte_of(punct) {
            Some(byte) if kind == TokenKind::String => format!("quote {}", byte as char),
            Some(byte) => format!("{}", byte as char),
            None => format!("#{}", punct.ordinal()),
        },
    }
}

// ============================================================================
// Path Utilities
// ============================================================================

/// Files directly inside `dir` whose extension is `ext`, sorted by path.
///
/// `ext` may be given with or without the leading dot.
pub fn find_matching_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LuffatError::Validation(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    let ext = ext.trim_start_matches('.');
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == ext) {
            files.push(path);
        }
    }
    files.sort();

    tracing::debug!(dir = %dir.display(), count = files.len(), "matched files");
    Ok(files)
}
