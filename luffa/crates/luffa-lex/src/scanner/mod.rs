//! Scanner implementation.
//!
//! - `core` - the `Scanner` struct, construction and token dispatch
//! - `skip` - whitespace and comment skipping
//! - `string`, `number`, `name` - one lexeme family each
//! - `expect` - typed expectations on top of `next_token`
//! - `report` - first-error bookkeeping

mod core;
mod expect;
mod name;
mod number;
mod report;
mod skip;
mod string;

pub use self::core::Scanner;
