//! luffa-util - Shared foundation types for the luffa scanner
//!
//! This crate holds the pieces that sit around the scanner rather than inside
//! it:
//!
//! - [`span`] - file indexes, token positions and the [`SourceMap`] that maps
//!   a [`FileIndex`] back to the file it was loaded from.
//! - [`diagnostic`] - the [`Handler`] that collects diagnostics, and the
//!   [`ErrorSink`] trait through which expectation failures are reported.
//! - [`error`] - error types for source loading.
//!
//! # Example
//!
//! ```
//! use luffa_util::{ErrorSink, Handler, SourceMap};
//!
//! let mut sources = SourceMap::new();
//! let index = sources.add("init.lua", b"local x = 1".to_vec());
//! assert_eq!(sources.name(index), Some("init.lua"));
//!
//! let handler = Handler::new();
//! (&handler).error("Expected a name, got a number.");
//! assert!(handler.has_errors());
//! ```

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, ErrorSink, Handler, Level, LogSink};
pub use error::{SourceError, SourceResult};
pub use span::{FileIndex, Position, SourceFile, SourceMap};
