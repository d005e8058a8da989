//! Token definitions for the Rill language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text that
//! produced it. The kind set is closed; the downstream parser matches on
//! it exhaustively instead of comparing tag strings.

use rustc_hash::FxHashMap;
use static_assertions::assert_eq_size;
use std::fmt;
use std::sync::LazyLock;

/// The lexical category of a token.
///
/// Every variant name is stable: the parser and any tooling built on the
/// token stream refer to these names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `=`
    Assign,
    /// `!`
    Bang,
    /// `==`
    Eq,
    /// `!=`
    NotEq,

    // Delimiters
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // Keywords
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,

    // Literals and names
    /// Integer literal, e.g. `42`
    Int,
    /// Identifier, e.g. `five`
    Identifier,

    // Special
    /// End of input marker
    Eof,
    /// A character the scanner could not classify
    Illegal,
}

// The kind fits in a byte; Token stays two words plus a discriminant.
assert_eq_size!(TokenKind, u8);

impl TokenKind {
    /// Returns true for the reserved-word kinds.
    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Asterisk => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::Assign => "`=`",
            TokenKind::Bang => "`!`",
            TokenKind::Eq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Function => "`fn`",
            TokenKind::Let => "`let`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Return => "`return`",
            TokenKind::Int => "integer literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Eof => "end of input",
            TokenKind::Illegal => "illegal character",
        };
        f.write_str(name)
    }
}

/// A token produced by the lexer.
///
/// `text` borrows the verbatim source substring, so identifiers and
/// integer literals reach the parser exactly as written. The end-of-input
/// token has empty text.
///
/// # Example
///
/// ```
/// use rillc_lex::token::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier, "five");
/// assert_eq!(token.kind, TokenKind::Identifier);
/// assert_eq!(token.text, "five");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The lexical category.
    pub kind: TokenKind,
    /// The exact source text of the token (empty for `Eof`).
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token from a kind and its source text.
    pub const fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// The end-of-input token.
    pub const fn eof() -> Token<'static> {
        Token {
            kind: TokenKind::Eof,
            text: "",
        }
    }

    /// Returns true if this is the end-of-input token.
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Int | TokenKind::Identifier | TokenKind::Illegal => {
                write!(f, "{} `{}`", self.kind, self.text)
            },
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// Reserved words of the language, initialized once on first lookup and
/// immutable afterwards.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    FxHashMap::from_iter([
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
    ])
});

/// Looks up an identifier in the keyword table.
///
/// Matching is exact and case-sensitive; `If` and `FN` are ordinary
/// identifiers.
///
/// # Example
///
/// ```
/// use rillc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("let"), Some(TokenKind::Let));
/// assert_eq!(keyword_from_ident("Let"), None);
/// assert_eq!(keyword_from_ident("letter"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keywords() {
        assert_eq!(keyword_from_ident("fn"), Some(TokenKind::Function));
        assert_eq!(keyword_from_ident("let"), Some(TokenKind::Let));
        assert_eq!(keyword_from_ident("true"), Some(TokenKind::True));
        assert_eq!(keyword_from_ident("false"), Some(TokenKind::False));
        assert_eq!(keyword_from_ident("if"), Some(TokenKind::If));
        assert_eq!(keyword_from_ident("else"), Some(TokenKind::Else));
        assert_eq!(keyword_from_ident("return"), Some(TokenKind::Return));
    }

    #[test]
    fn test_non_keywords() {
        assert_eq!(keyword_from_ident("five"), None);
        assert_eq!(keyword_from_ident("func"), None);
        assert_eq!(keyword_from_ident("lets"), None);
        assert_eq!(keyword_from_ident(""), None);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(keyword_from_ident("If"), None);
        assert_eq!(keyword_from_ident("FN"), None);
        assert_eq!(keyword_from_ident("RETURN"), None);
    }

    #[test]
    fn test_keyword_kinds_report_as_keywords() {
        assert!(TokenKind::Function.is_keyword());
        assert!(TokenKind::Return.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Assign.is_keyword());
    }

    #[test]
    fn test_eof_token() {
        let token = Token::eof();
        assert!(token.is_eof());
        assert_eq!(token.text, "");
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::new(TokenKind::Eq, "==").to_string(), "`==`");
        assert_eq!(
            Token::new(TokenKind::Identifier, "add").to_string(),
            "identifier `add`"
        );
        assert_eq!(
            Token::new(TokenKind::Illegal, "@").to_string(),
            "illegal character `@`"
        );
    }
}
