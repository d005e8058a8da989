//! Integer literal lexing.
//!
//! This module handles lexing of integer literals. Rill integers are plain
//! decimal digit runs: no sign, no decimal point, no exponent, and no
//! leading-zero normalization. The literal reaches the parser verbatim.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a, '_> {
    /// Lexes an integer literal.
    ///
    /// Greedily consumes the longest run of ASCII digits. The run stops at
    /// the first non-digit, which is left unconsumed for the next call; a
    /// letter directly after the digits therefore starts a fresh token
    /// rather than extending this one.
    ///
    /// # Returns
    ///
    /// An `Int` token whose text is the exact digit run.
    pub fn lex_number(&mut self) -> Token<'a> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        self.token(TokenKind::Int)
    }
}
