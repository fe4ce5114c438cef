//! Core error types for luffa-util crate

use std::path::PathBuf;

use thiserror::Error;

/// Error type for source map operations
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be read from disk
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file index that was never handed out by the source map
    #[error("Unknown file index: {0}")]
    UnknownFile(usize),
}

/// Result type alias for source map operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
