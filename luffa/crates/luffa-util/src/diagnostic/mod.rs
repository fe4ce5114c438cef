//! Diagnostic module - Error reporting infrastructure.
//!
//! The scanner reports malformed input through a [`Handler`], which collects
//! every diagnostic it is given. Expectation helpers on top of the scanner
//! report through the narrower [`ErrorSink`] trait so that callers can plug
//! in their own reporting (a [`Handler`], the logging-only [`LogSink`], or
//! anything else).
//!
//! # Examples
//!
//! ```
//! use luffa_util::diagnostic::{Diagnostic, Handler, Level};
//! use luffa_util::Position;
//!
//! let handler = Handler::new();
//! handler.emit(Diagnostic::error("init.lua(3) : Invalid number format", Position::START));
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].level, Level::Error);
//! ```

mod sink;

pub use sink::{ErrorSink, LogSink};

use std::cell::RefCell;
use std::fmt;

use crate::span::{FileIndex, Position};

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use luffa_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Malformed input or a failed expectation
    Error,
    /// A problem that did not stop the caller
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Fully formatted message
    pub message: String,
    /// Where the scanner was when the diagnostic was raised
    pub position: Position,
    /// File the diagnostic belongs to, when the scanner was given one
    pub file: Option<FileIndex>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, position: Position) -> Self {
        Self {
            level,
            message: message.into(),
            position,
            file: None,
        }
    }

    pub fn error(message: impl Into<String>, position: Position) -> Self {
        Self::new(Level::Error, message, position)
    }

    pub fn warning(message: impl Into<String>, position: Position) -> Self {
        Self::new(Level::Warning, message, position)
    }

    /// Attach the file the diagnostic came from
    pub fn with_file(mut self, file: Option<FileIndex>) -> Self {
        self.file = file;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}

/// Handler for collecting diagnostics
///
/// The handler uses interior mutability so that a scanner can hold a shared
/// reference to it while the caller inspects it between calls.
///
/// # Examples
///
/// ```
/// use luffa_util::diagnostic::{Diagnostic, Handler};
/// use luffa_util::Position;
///
/// let handler = Handler::new();
/// assert!(!handler.has_errors());
///
/// handler.emit(Diagnostic::warning("odd spacing", Position::START));
/// assert!(!handler.has_errors());
/// assert_eq!(handler.diagnostics().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Snapshot of everything reported so far, in report order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove all collected diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_count_ignores_warnings() {
        let handler = Handler::new();
        handler.emit(Diagnostic::error("one", Position::START));
        handler.emit(Diagnostic::warning("two", Position::START));
        handler.emit(Diagnostic::error("three", Position::START));
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.diagnostics().len(), 3);
    }

    #[test]
    fn test_clear() {
        let handler = Handler::new();
        handler.emit(Diagnostic::error("one", Position::START));
        handler.clear();
        assert!(!handler.has_errors());
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("a.lua(0) : Invalid number format", Position::START)
            .with_file(Some(FileIndex(2)));
        assert_eq!(diag.to_string(), "error: a.lua(0) : Invalid number format");
        assert_eq!(diag.file, Some(FileIndex(2)));
    }
}
