//! Operator lexing with one-character lookahead.
//!
//! `=` and `!` are the only characters that can start a two-character
//! operator. The second character is consumed only when it completes the
//! pair; otherwise the single-character form is produced and the next call
//! starts fresh on whatever followed.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a, '_> {
    /// Lexes equals or equals-equals.
    ///
    /// Handles: `=`, `==`
    pub fn lex_equals(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::Eq)
        } else {
            self.token(TokenKind::Assign)
        }
    }

    /// Lexes bang or not-equals.
    ///
    /// Handles: `!`, `!=`
    pub fn lex_bang(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::NotEq)
        } else {
            self.token(TokenKind::Bang)
        }
    }
}
