//! Error handling module for the luffat CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the luffat CLI application.
#[derive(Error, Debug)]
pub enum LuffatError {
    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command finished with failures.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when a source file cannot be loaded.
    #[error(transparent)]
    Source(#[from] luffa_util::SourceError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using LuffatError.
pub type Result<T> = std::result::Result<T, LuffatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = LuffatError::Config("unknown comment style".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown comment style");
    }

    #[test]
    fn test_validation_error_display() {
        let err = LuffatError::Validation("not a directory: src".to_string());
        assert_eq!(err.to_string(), "Validation error: not a directory: src");
    }

    #[test]
    fn test_command_execution_error_display() {
        let err = LuffatError::CommandExecution("1 file(s) had lexical errors".to_string());
        assert_eq!(
            err.to_string(),
            "Command execution failed: 1 file(s) had lexical errors"
        );
    }

    #[test]
    fn test_source_error_is_transparent() {
        let err: LuffatError = luffa_util::SourceError::UnknownFile(2).into();
        assert_eq!(err.to_string(), "Unknown file index: 2");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LuffatError = io_err.into();
        assert!(matches!(err, LuffatError::Io(_)));
    }
}
