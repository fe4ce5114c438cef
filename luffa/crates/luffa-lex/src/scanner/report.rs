//! Error reporting.

use std::fmt;

use luffa_util::Diagnostic;

use super::core::Scanner;
use crate::comment::CommentSyntax;

impl<'src, C: CommentSyntax> Scanner<'src, C> {
    /// Records an error as `name(line) : message` and returns `false`.
    ///
    /// Every error is logged and forwarded to the attached handler; only the
    /// first one is kept for [`Scanner::error`].
    pub(crate) fn report(&mut self, message: impl fmt::Display) -> bool {
        let formatted = format!("{}({}) : {}", self.name, self.cursor.line(), message);
        tracing::debug!(target: "luffa_lex", "{}", formatted);

        if let Some(handler) = self.handler {
            handler.emit(
                Diagnostic::error(formatted.clone(), self.cursor.location())
                    .with_file(self.file_index),
            );
        }
        if self.first_error.is_none() {
            self.first_error = Some(formatted.clone());
        }
        self.last_error = Some(formatted);
        false
    }

    /// Whether any error has been reported.
    pub fn had_error(&self) -> bool {
        self.first_error.is_some()
    }

    /// The first error reported, formatted as `name(line) : message`.
    pub fn error(&self) -> Option<&str> {
        self.first_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use luffa_util::{FileIndex, Handler};

    use crate::{CStyleComments, OwnedToken, ScanOptions, Scanner};

    #[test]
    fn test_only_first_error_kept() {
        let mut scanner = Scanner::new("two", b"1..2 3..4");
        let mut token = OwnedToken::new();
        let mut produced = Vec::new();
        while !scanner.at_end() {
            if scanner.next_token(&mut token) {
                produced.push(token.text().to_vec());
            }
        }
        assert_eq!(produced, vec![b"2".to_vec(), b"4".to_vec()]);
        assert_eq!(scanner.error(), Some("two(0) : Invalid number format"));
    }

    #[test]
    fn test_handler_receives_every_error() {
        let handler = Handler::new();
        let options = ScanOptions::default().file_index(FileIndex(3));
        let mut scanner = Scanner::with_options("h", b"1..2 3..4", options, CStyleComments)
            .with_handler(&handler);
        let mut token = OwnedToken::new();
        while !scanner.at_end() {
            scanner.next_token(&mut token);
        }
        assert_eq!(handler.error_count(), 2);
        let diagnostics = handler.diagnostics();
        assert_eq!(diagnostics[0].message, "h(0) : Invalid number format");
        assert_eq!(diagnostics[0].file, Some(FileIndex(3)));
    }
}
