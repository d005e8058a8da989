//! Core error types for rillc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for span operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for the source text
    #[error("Span out of bounds: source has {source_len} bytes, span is {start}..{end}")]
    OutOfBounds {
        source_len: usize,
        start: usize,
        end: usize,
    },

    /// Span does not fall on UTF-8 character boundaries
    #[error("Span {start}..{end} does not lie on character boundaries")]
    NotCharAligned { start: usize, end: usize },
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;
