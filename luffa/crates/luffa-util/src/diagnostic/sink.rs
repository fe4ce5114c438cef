//! Error sinks used by expectation helpers.

use super::{Diagnostic, Handler};
use crate::span::Position;

/// Receiver for human-readable error messages.
///
/// Implemented for `&Handler` so a shared handler can be passed wherever a
/// sink is wanted.
///
/// ```
/// use luffa_util::ErrorSink;
///
/// #[derive(Default)]
/// struct Collect(Vec<String>);
///
/// impl ErrorSink for Collect {
///     fn error(&mut self, message: &str) {
///         self.0.push(message.to_string());
///     }
/// }
///
/// let mut sink = Collect::default();
/// sink.error("Expected integer, got name.");
/// assert_eq!(sink.0, ["Expected integer, got name."]);
/// ```
pub trait ErrorSink {
    fn error(&mut self, message: &str);
}

impl ErrorSink for &Handler {
    fn error(&mut self, message: &str) {
        self.emit(Diagnostic::error(message, Position::START));
    }
}

impl ErrorSink for Handler {
    fn error(&mut self, message: &str) {
        self.emit(Diagnostic::error(message, Position::START));
    }
}

/// Sink that only logs, prefixing each message with `ERROR: `.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn error(&mut self, message: &str) {
        tracing::error!("ERROR: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(sink: &mut dyn ErrorSink, message: &str) {
        sink.error(message);
    }

    #[test]
    fn test_handler_ref_sink() {
        let handler = Handler::new();
        let mut sink = &handler;
        report(&mut sink, "Failed to peek next token.");
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics()[0].message, "Failed to peek next token.");
    }

    #[test]
    fn test_log_sink_does_not_panic() {
        report(&mut LogSink, "Expected a name, got a number.");
    }
}
