//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API.

use super::{Diagnostic, Handler, Level};
use crate::span::Span;

/// Fluent builder for [`Diagnostic`] values
///
/// # Examples
///
/// ```
/// use rillc_util::diagnostic::DiagnosticBuilder;
/// use rillc_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("unexpected character '#'")
///     .span(Span::point(12))
///     .note("stray punctuation is scanned as a single illegal token")
///     .build();
///
/// assert_eq!(diag.span, Span::new(12, 13));
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    notes: Vec<String>,
}

impl DiagnosticBuilder {
    /// Start building an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start building a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            notes: Vec::new(),
        }
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Attach a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Finish building the diagnostic
    pub fn build(self) -> Diagnostic {
        let mut diag = Diagnostic::new(self.level, self.message, self.span);
        diag.notes = self.notes;
        diag
    }

    /// Finish building and emit to the handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
