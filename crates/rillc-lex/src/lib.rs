//! rillc-lex - Lexical Analyzer for the Rill Language
//!
//! This crate provides the lexer (tokenizer) for the Rill language. It
//! transforms source text into a finite stream of tokens consumed by the
//! parser.
//!
//! # Overview
//!
//! Lexical analysis is the first phase of compilation. The scanner owns a
//! single forward-moving cursor over the source and produces exactly one
//! token per call, using at most one character of lookahead. Scanning
//! never fails: a character that fits no class is emitted as an `Illegal`
//! token (and reported to the diagnostic handler) and the scan continues.
//!
//! # Example Usage
//!
//! ```
//! use rillc_util::Handler;
//! use rillc_lex::{Lexer, TokenKind};
//!
//! let source = "let five = 5;";
//! let mut handler = Handler::new();
//! let mut lexer = Lexer::new(source, &mut handler);
//!
//! // Iterate through tokens (stops before Eof)
//! for token in &mut lexer {
//!     println!("{}", token);
//! }
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::new(source, &mut handler);
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//!
//! ## Identifiers
//!
//! An ASCII letter followed by ASCII letters and digits: `[a-zA-Z][a-zA-Z0-9]*`
//!
//! ## Literals
//!
//! Decimal integers only: `42`, `007`. No floats, no strings.
//!
//! ## Operators
//!
//! `+`, `-`, `*`, `/`, `<`, `>`, `=`, `!`, `==`, `!=`
//!
//! ## Delimiters
//!
//! `,`, `;`, `(`, `)`, `{`, `}`
//!
//! ## Special
//!
//! - **Eof**: end-of-input marker, repeated on every call past the end
//! - **Illegal**: a single character the scanner could not classify

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};
