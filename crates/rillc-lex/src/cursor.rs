//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while scanning source text. The position only ever moves forward; the
//! scanner never unreads a character, it only peeks one character ahead.

/// A cursor for traversing source code character by character.
///
/// The cursor holds an immutable borrow of the source string and a mutable
/// byte position. Character classification in Rill is ASCII-only, but the
/// cursor still steps over multi-byte UTF-8 sequences as whole characters
/// so that a stray non-ASCII byte can never split the source mid-character.
///
/// # Example
///
/// ```
/// use rillc_lex::cursor::Cursor;
///
/// let source = "let x = 42;";
/// let mut cursor = Cursor::new(source);
///
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use rillc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        if self.position >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Returns the character after the current one without consuming it.
    ///
    /// Returns '\0' if the current character is the last one, or if the
    /// cursor is already at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use rillc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("!=");
    /// assert_eq!(cursor.current_char(), '!');
    /// assert_eq!(cursor.peek_char(), '=');
    /// ```
    #[inline]
    pub fn peek_char(&self) -> char {
        if self.is_at_end() {
            return '\0';
        }
        let next = self.position + self.current_char().len_utf8();
        if next >= self.source.len() {
            return '\0';
        }
        self.source[next..].chars().next().unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Does nothing if already at the end, so the cursor stays parked there.
    ///
    /// # Example
    ///
    /// ```
    /// use rillc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// cursor.advance();
    /// assert_eq!(cursor.current_char(), 'b');
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        // Fast path for ASCII (most common)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use rillc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// Returns true if the character was matched and consumed, false
    /// otherwise. This is the one-character lookahead used to split `=`
    /// from `==` and `!` from `!=`.
    ///
    /// # Example
    ///
    /// ```
    /// use rillc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips whitespace characters.
    ///
    /// Rill whitespace is exactly space, tab, line feed and carriage
    /// return. No token is ever produced for a whitespace run.
    ///
    /// # Example
    ///
    /// ```
    /// use rillc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  \t\r\nlet");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_char(), 'l');
    /// ```
    pub fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), ' ' | '\t' | '\n' | '\r') {
            self.advance();
        }
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use rillc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.advance();
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
