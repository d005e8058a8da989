//! rillc-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by the rillc compiler
//! phases. The lexical front end depends on it for:
//!
//! - **Spans** ([`span::Span`]): byte-offset ranges into the source text.
//!   Rill keeps a single linear cursor during scanning, so spans carry no
//!   line/column information; a range of byte offsets is enough to point a
//!   downstream consumer back at the offending text.
//! - **Diagnostics** ([`diagnostic`]): the `Handler` sink that collects
//!   `Diagnostic` values emitted during a scan. Lexical errors are never
//!   fatal; they are recorded here while the scanner keeps producing
//!   tokens.
//! - **Errors** ([`error`]): `thiserror`-derived enums for the few util
//!   operations that can fail (span validation and slicing).
//!
//! # Example
//!
//! ```
//! use rillc_util::{DiagnosticBuilder, Handler, Span};
//!
//! let source = "let x = @;";
//! let handler = Handler::new();
//!
//! // A scanner reports the stray '@' like this:
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .span(Span::point(8))
//!     .emit(&handler);
//!
//! let diags = handler.diagnostics();
//! assert_eq!(diags[0].span.snippet(source), Ok("@"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

// Re-export main types for convenience
pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use error::{SpanError, SpanResult};
pub use span::Span;
