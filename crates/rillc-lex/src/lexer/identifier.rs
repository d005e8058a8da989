//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a, '_> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with an ASCII letter, followed by the longest run
    /// of ASCII letters and digits. The run stops at the first character
    /// outside that class; that character is left unconsumed for the next
    /// call. After reading the run, the text is looked up in the keyword
    /// table.
    ///
    /// # Returns
    ///
    /// Either a keyword token (e.g. `TokenKind::Let`) or an `Identifier`
    /// token carrying the verbatim text.
    pub fn lex_identifier(&mut self) -> Token<'a> {
        while self.cursor.current_char().is_ascii_alphanumeric() {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        match keyword_from_ident(text) {
            Some(kind) => Token::new(kind, text),
            None => Token::new(TokenKind::Identifier, text),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use rillc_util::Handler;

    fn lex_ident(source: &str) -> Token<'_> {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &mut handler);
        lexer.next_token()
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_ident("foo");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text, "foo");
    }

    #[test]
    fn test_identifier_absorbs_digits() {
        let token = lex_ident("x1");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text, "x1");
    }

    #[test]
    fn test_greedy_longest_match() {
        let token = lex_ident("foobar123");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text, "foobar123");
    }

    #[test]
    fn test_keyword_fn() {
        let token = lex_ident("fn");
        assert_eq!(token.kind, TokenKind::Function);
        assert_eq!(token.text, "fn");
    }

    #[test]
    fn test_keyword_let() {
        let token = lex_ident("let");
        assert_eq!(token.kind, TokenKind::Let);
    }

    #[test]
    fn test_keyword_true() {
        assert_eq!(lex_ident("true").kind, TokenKind::True);
    }

    #[test]
    fn test_keyword_false() {
        assert_eq!(lex_ident("false").kind, TokenKind::False);
    }

    #[test]
    fn test_keyword_if() {
        assert_eq!(lex_ident("if").kind, TokenKind::If);
    }

    #[test]
    fn test_keyword_else() {
        assert_eq!(lex_ident("else").kind, TokenKind::Else);
    }

    #[test]
    fn test_keyword_return() {
        assert_eq!(lex_ident("return").kind, TokenKind::Return);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let token = lex_ident("letter");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text, "letter");
    }

    #[test]
    fn test_case_sensitivity() {
        assert_eq!(lex_ident("If").kind, TokenKind::Identifier);
        assert_eq!(lex_ident("FN").kind, TokenKind::Identifier);
        assert_eq!(lex_ident("True").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_run_stops_at_non_alphanumeric() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("add(x)", &mut handler);

        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text, "add");
        assert_eq!(lexer.next_token().kind, TokenKind::LParen);
    }
}
