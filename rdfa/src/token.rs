//! Tokens produced by the [`Tokenizer`](crate::Tokenizer).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal carried by the token that marks the end of the input.
pub const EOF_LITERAL: &str = "eof";

/// The kind of a token. This is a closed set, the notation has no keywords.
///
/// `Assign` only appears between the optional automaton name and its
/// definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// A maximal run of letters, digits and underscores.
    Identifier,
    Comma,
    Semicolon,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Pipe,
    Assign,
    /// End of the input. Returned again on every call once reached.
    Eof,
    /// A single character that is neither punctuation nor part of an identifier.
    Illegal,
}

impl TokenKind {
    /// Returns the kind of a punctuation character, if it is one.
    pub fn from_punctuation(c: char) -> Option<TokenKind> {
        match c {
            ',' => Some(TokenKind::Comma),
            ';' => Some(TokenKind::Semicolon),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            '|' => Some(TokenKind::Pipe),
            '=' => Some(TokenKind::Assign),
            _ => None,
        }
    }

    /// Short description used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Identifier => "<ident>",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Pipe => "|",
            TokenKind::Assign => "=",
            TokenKind::Eof => "<EOF>",
            TokenKind::Illegal => "<illegal>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Where a token starts in the source, both 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Position {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Token {
        Token {
            kind,
            literal: literal.into(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_punctuation() {
        assert_eq!(Some(TokenKind::Comma), TokenKind::from_punctuation(','));
        assert_eq!(Some(TokenKind::Pipe), TokenKind::from_punctuation('|'));
        assert_eq!(Some(TokenKind::LeftBrace), TokenKind::from_punctuation('{'));
        assert_eq!(Some(TokenKind::Assign), TokenKind::from_punctuation('='));
        assert_eq!(None, TokenKind::from_punctuation('#'));
        assert_eq!(None, TokenKind::from_punctuation('a'));
    }

    #[test]
    fn test_display() {
        assert_eq!("<ident>", TokenKind::Identifier.to_string());
        assert_eq!(")", TokenKind::RightParen.to_string());
        assert_eq!("3:14", Position::new(3, 14).to_string());
    }
}
