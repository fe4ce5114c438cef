//! Edge case tests for luffa-lex
