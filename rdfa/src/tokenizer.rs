//! Splits automaton definitions into tokens.

use crate::chars;
use crate::token::{Position, Token, TokenKind, EOF_LITERAL};
use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

/// Lazily scans a definition, one token at a time.
///
/// The tokenizer knows nothing about automata, it only recognises
/// punctuation and identifiers. Anything else becomes a
/// [`TokenKind::Illegal`] token holding the offending character, so the
/// caller decides how to report it.
///
/// As an [`Iterator`], it yields the [`TokenKind::Eof`] token once and then
/// stops. It cannot be rewound.
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    position: Position,
    eof_yielded: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Tokenizer<'a> {
        Tokenizer {
            chars: input.chars().peekable(),
            position: Position::default(),
            eof_yielded: false,
        }
    }

    /// Returns the next token, skipping whitespace first.
    ///
    /// Once the input is exhausted, every call returns an end of input token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let c = match self.chars.peek() {
            Some(&c) => c,
            None => return Token::new(TokenKind::Eof, EOF_LITERAL, start),
        };

        if chars::is_identifier(c) {
            let identifier = self.read_identifier();
            return Token::new(TokenKind::Identifier, identifier, start);
        }

        self.bump();
        let kind = TokenKind::from_punctuation(c).unwrap_or(TokenKind::Illegal);
        if kind == TokenKind::Illegal {
            log::trace!("illegal character {:?} at {}", c, start);
        }

        Token::new(kind, c.to_string(), start)
    }

    /// Drains the remaining tokens, the end of input token included.
    pub fn tokenize_all(self) -> Vec<Token> {
        self.collect()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().map_or(false, |&c| chars::is_whitespace(c)) {
            self.bump();
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut identifier = String::new();
        while let Some(&c) = self.chars.peek() {
            if !chars::is_identifier(c) {
                break;
            }
            identifier.push(c);
            self.bump();
        }
        identifier
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.eof_yielded {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.eof_yielded = true;
        }
        Some(token)
    }
}

impl<'a> FusedIterator for Tokenizer<'a> {}
