//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use rillc_util::{DiagnosticBuilder, Handler, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the Rill language.
///
/// The lexer transforms source text into a stream of tokens. Each call to
/// [`next_token`](Lexer::next_token) skips leading whitespace, classifies
/// exactly one token, and leaves the cursor on the first character after
/// it. Scanning never fails: a character that fits no class becomes an
/// `Illegal` token and the scan continues.
///
/// # Example
///
/// ```
/// use rillc_util::Handler;
/// use rillc_lex::{Lexer, TokenKind};
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("let x = 42;", &mut handler);
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().text, "x");
/// ```
pub struct Lexer<'a, 'h> {
    /// Character cursor for source traversal.
    pub cursor: Cursor<'a>,

    /// Diagnostic handler for error reporting.
    pub handler: &'h mut Handler,

    /// Starting position of the current token (byte offset).
    pub token_start: usize,
}

impl<'a, 'h> Lexer<'a, 'h> {
    /// Creates a new lexer for the given source code.
    ///
    /// The returned tokens borrow from `source` only, so they stay usable
    /// after the handler borrow ends.
    ///
    /// # Arguments
    ///
    /// * `source` - The source code to lex
    /// * `handler` - Error handler for reporting lexical errors
    pub fn new(source: &'a str, handler: &'h mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// This is the main entry point for tokenization. It consumes any run
    /// of whitespace, then dispatches on the current character. At end of
    /// input it returns `Eof` with empty text, and keeps returning `Eof`
    /// on every later call.
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();

        if self.cursor.is_at_end() {
            return Token::eof();
        }

        match self.cursor.current_char() {
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Asterisk),
            '/' => self.single(TokenKind::Slash),
            '<' => self.single(TokenKind::Lt),
            '>' => self.single(TokenKind::Gt),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            c if c.is_ascii_alphabetic() => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => {
                self.cursor.advance();
                self.report_error(format!("unexpected character '{}'", c));
                self.token(TokenKind::Illegal)
            },
        }
    }

    /// Consumes the current character and produces a one-character token.
    fn single(&mut self, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.token(kind)
    }

    /// Builds a token whose text is everything consumed since
    /// `token_start`.
    pub fn token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, self.cursor.slice_from(self.token_start))
    }

    /// Reports a lexical error spanning the current token.
    ///
    /// # Arguments
    /// * `message` - The error message to display
    pub fn report_error(&mut self, message: String) {
        let span = Span::new(self.token_start, self.cursor.position());
        DiagnosticBuilder::error(message).span(span).emit(self.handler);
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
