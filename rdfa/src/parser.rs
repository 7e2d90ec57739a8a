//! Reads the automaton notation.
//!
//! A definition lists, separated by semicolons, the states, the alphabet, the
//! transitions, the start state and the accept states:
//!
//! ```text
//! s1, s2; 0, 1; s1,0,s1 | s1,1,s2 | s2,0,s1 | s2,1,s2; s1; s2
//! ```
//!
//! Lists may be wrapped in braces, each transition in parentheses and the
//! whole definition in parentheses:
//!
//! ```text
//! ({s1, s2}; {0, 1}; {(s1,0,s1) | (s1,1,s2) | (s2,0,s1) | (s2,1,s2)}; s1; {s2})
//! ```
//!
//! Braced lists may be empty, which is mostly useful for automata that accept
//! nothing.
//!
//! A definition may be named by prefixing it with `name =`:
//!
//! ```text
//! ends_with_one = (s1, s2; 0, 1; s1,0,s1 | s1,1,s2 | s2,0,s1 | s2,1,s2; s1; s2)
//! ```
//!
//! States and alphabet symbols can only be declared once.

use crate::automaton::{Automaton, Transition};
use crate::error::{DefinitionError, ParseError, TransitionField};
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;
use std::collections::VecDeque;

/// The tokens a transition was read from.
struct TransitionTokens {
    from_state: Token,
    symbol: Token,
    to_state: Token,
}

/// A definition as it was written, kept around so that errors found while
/// building the automaton can point back at the source.
struct Definition {
    states: Vec<Token>,
    alphabet: Vec<Token>,
    transitions: Vec<TransitionTokens>,
    start_state: Token,
    accept_states: Vec<Token>,
}

fn literals(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|token| token.literal.clone()).collect()
}

impl Definition {
    fn build(&self) -> Result<Automaton, ParseError> {
        let alphabet = self
            .alphabet
            .iter()
            .map(symbol)
            .collect::<Result<Vec<char>, ParseError>>()?;
        let transitions = self
            .transitions
            .iter()
            .map(|transition| {
                Ok(Transition::new(
                    transition.from_state.literal.clone(),
                    symbol(&transition.symbol)?,
                    transition.to_state.literal.clone(),
                ))
            })
            .collect::<Result<Vec<Transition>, ParseError>>()?;

        Automaton::new(
            literals(&self.states),
            alphabet,
            transitions,
            self.start_state.literal.clone(),
            literals(&self.accept_states),
        )
        .map_err(|error| {
            let token = self.locate(&error);
            ParseError::Definition {
                literal: token.literal.clone(),
                position: token.position,
                error,
            }
        })
    }

    /// Finds the token responsible for `error`.
    fn locate(&self, error: &DefinitionError) -> &Token {
        let token = match error {
            DefinitionError::InvalidState { index } => self.states.get(*index),
            DefinitionError::InvalidTransition { index, field } => {
                self.transitions.get(*index).map(|transition| match field {
                    TransitionField::FromState(_) => &transition.from_state,
                    TransitionField::Symbol(_) => &transition.symbol,
                    TransitionField::ToState(_) => &transition.to_state,
                })
            }
            DefinitionError::InvalidStartState(_) => None,
            DefinitionError::InvalidAcceptState(state) => self
                .accept_states
                .iter()
                .find(|token| &token.literal == state),
        };

        token.unwrap_or(&self.start_state)
    }
}

pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    lookahead: VecDeque<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(tokenizer: Tokenizer<'a>) -> Parser<'a> {
        Parser {
            tokenizer,
            lookahead: VecDeque::new(),
        }
    }

    /// Reads a whole definition and builds the automaton it describes.
    ///
    /// Anything left after the definition is an error.
    pub fn parse(mut self) -> Result<Automaton, ParseError> {
        let name = self.parse_name();
        let parenthesized = self.consume_optional(TokenKind::LeftParen);

        let states = self.parse_identifiers()?;
        if let Some(token) = first_repeat(&states) {
            return Err(ParseError::DuplicateState {
                literal: token.literal.clone(),
                position: token.position,
            });
        }
        self.consume(TokenKind::Semicolon)?;

        let alphabet = self.parse_alphabet()?;
        self.consume(TokenKind::Semicolon)?;
        let transitions = self.parse_transitions()?;
        self.consume(TokenKind::Semicolon)?;
        let start_state = self.consume(TokenKind::Identifier)?;
        self.consume(TokenKind::Semicolon)?;
        let accept_states = self.parse_identifiers()?;

        if parenthesized {
            self.consume(TokenKind::RightParen)?;
        }
        self.consume(TokenKind::Eof)?;

        log::debug!(
            "parsed definition {} with {} states and {} transitions",
            name.as_deref().unwrap_or("<unnamed>"),
            states.len(),
            transitions.len()
        );

        let automaton = Definition {
            states,
            alphabet,
            transitions,
            start_state,
            accept_states,
        }
        .build()?;

        Ok(match name {
            Some(name) => automaton.named(name),
            None => automaton,
        })
    }

    fn next(&mut self) -> Token {
        match self.lookahead.pop_front() {
            Some(token) => token,
            None => self.tokenizer.next_token(),
        }
    }

    fn peek_nth(&mut self, n: usize) -> &Token {
        while self.lookahead.len() <= n {
            let token = self.tokenizer.next_token();
            self.lookahead.push_back(token);
        }
        &self.lookahead[n]
    }

    fn consume(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.next();
        if token.kind != kind {
            return Err(ParseError::UnexpectedToken {
                expected: kind,
                found: token.kind,
                literal: token.literal,
                position: token.position,
            });
        }

        log::trace!("consumed {} '{}' at {}", token.kind, token.literal, token.position);
        Ok(token)
    }

    fn consume_optional(&mut self, kind: TokenKind) -> bool {
        if self.peek_nth(0).kind == kind {
            self.next();
            true
        } else {
            false
        }
    }

    /// `name =` in front of a definition. Needs two tokens of lookahead since
    /// a definition without braces also starts with an identifier.
    fn parse_name(&mut self) -> Option<String> {
        if self.peek_nth(0).kind == TokenKind::Identifier && self.peek_nth(1).kind == TokenKind::Assign {
            let name = self.next().literal;
            self.next();
            Some(name)
        } else {
            None
        }
    }

    /// Identifiers separated by commas, optionally in braces.
    fn parse_identifiers(&mut self) -> Result<Vec<Token>, ParseError> {
        let braced = self.consume_optional(TokenKind::LeftBrace);
        let mut identifiers = Vec::new();

        if braced && self.consume_optional(TokenKind::RightBrace) {
            return Ok(identifiers);
        }

        loop {
            identifiers.push(self.consume(TokenKind::Identifier)?);
            if !self.consume_optional(TokenKind::Comma) {
                break;
            }
        }

        if braced {
            self.consume(TokenKind::RightBrace)?;
        }

        Ok(identifiers)
    }

    fn parse_alphabet(&mut self) -> Result<Vec<Token>, ParseError> {
        let alphabet = self.parse_identifiers()?;
        for token in &alphabet {
            symbol(token)?;
        }

        match first_repeat(&alphabet) {
            Some(token) => Err(ParseError::DuplicateSymbol {
                literal: token.literal.clone(),
                position: token.position,
            }),
            None => Ok(alphabet),
        }
    }

    fn parse_transitions(&mut self) -> Result<Vec<TransitionTokens>, ParseError> {
        let braced = self.consume_optional(TokenKind::LeftBrace);
        let mut transitions = Vec::new();

        if braced && self.consume_optional(TokenKind::RightBrace) {
            return Ok(transitions);
        }

        loop {
            transitions.push(self.parse_transition()?);
            if !self.consume_optional(TokenKind::Pipe) {
                break;
            }
        }

        if braced {
            self.consume(TokenKind::RightBrace)?;
        }

        Ok(transitions)
    }

    fn parse_transition(&mut self) -> Result<TransitionTokens, ParseError> {
        let parenthesized = self.consume_optional(TokenKind::LeftParen);

        let from_state = self.consume(TokenKind::Identifier)?;
        self.consume(TokenKind::Comma)?;
        let read = self.consume(TokenKind::Identifier)?;
        symbol(&read)?;
        self.consume(TokenKind::Comma)?;
        let to_state = self.consume(TokenKind::Identifier)?;

        if parenthesized {
            self.consume(TokenKind::RightParen)?;
        }

        Ok(TransitionTokens {
            from_state,
            symbol: read,
            to_state,
        })
    }
}

/// Symbols are written as identifiers made of a single character.
fn symbol(token: &Token) -> Result<char, ParseError> {
    let mut chars = token.literal.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ParseError::SymbolTooLong {
            literal: token.literal.clone(),
            position: token.position,
        }),
    }
}

/// The first token whose literal already appeared earlier in `tokens`.
fn first_repeat(tokens: &[Token]) -> Option<&Token> {
    tokens
        .iter()
        .enumerate()
        .find(|(index, token)| tokens[..*index].iter().any(|earlier| earlier.literal == token.literal))
        .map(|(_, token)| token)
}

/// Parses a definition written in the notation described in this module.
pub fn parse(source: &str) -> Result<Automaton, ParseError> {
    Parser::new(Tokenizer::new(source)).parse()
}
