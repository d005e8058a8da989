//! Edge case tests for rillc-lex
