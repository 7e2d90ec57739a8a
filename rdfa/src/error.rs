//! Errors returned while building, running and parsing automata.
//!
//! Messages are part of the public contract: tools built on this crate match
//! on them, so changing the wording is a breaking change.

use crate::token::{Position, TokenKind};
use std::fmt;
use thiserror::Error;

/// The part of a transition that refers to something undeclared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionField {
    FromState(String),
    Symbol(char),
    ToState(String),
}

impl fmt::Display for TransitionField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransitionField::FromState(state) => {
                write!(f, "FromState '{}' is not in the list of states", state)
            }
            TransitionField::Symbol(symbol) => {
                write!(f, "Symbol '{}' is not in alphabet", symbol)
            }
            TransitionField::ToState(state) => {
                write!(f, "ToState '{}' is not in the list of states", state)
            }
        }
    }
}

/// Reasons why a definition does not describe a valid automaton.
///
/// Validation stops at the first problem, so at most one of these is ever
/// reported for a given definition.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    /// A state identifier is empty.
    #[error("State of index {index} invalid, can not be empty")]
    InvalidState { index: usize },
    /// A transition refers to an undeclared state or symbol.
    #[error("Transition of index {index} is invalid! {field}")]
    InvalidTransition { index: usize, field: TransitionField },
    /// The start state is not declared.
    #[error("Start state '{0}' is not in the list of states")]
    InvalidStartState(String),
    /// An accept state is not declared.
    #[error("Accept state '{0}' is not in the list of states")]
    InvalidAcceptState(String),
}

/// No transition leaves `state` on `symbol`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("There is no transition for the state '{state}' and symbol '{symbol}'")]
pub struct NoTransition {
    pub state: String,
    pub symbol: char,
}

/// Reasons why an input could not be run to the end.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Symbol '{0}' is not in the alphabet")]
    SymbolNotInAlphabet(char),
    #[error(transparent)]
    NoTransition(#[from] NoTransition),
}

/// Errors raised while reading the automaton notation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected token type '{expected}', got '{found}' ('{literal}') at {position}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        literal: String,
        position: Position,
    },
    #[error("Expected alphabet symbol to be a single character, got '{literal}' at {position}")]
    SymbolTooLong { literal: String, position: Position },
    #[error("State '{literal}' is already in the list of states at {position}")]
    DuplicateState { literal: String, position: Position },
    #[error("Symbol '{literal}' is already in the alphabet at {position}")]
    DuplicateSymbol { literal: String, position: Position },
    /// The definition reads fine but does not describe a valid automaton.
    /// `literal` and `position` point at the offending token.
    #[error("{error} at {position}")]
    Definition {
        #[source]
        error: DefinitionError,
        literal: String,
        position: Position,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_messages() {
        let err = DefinitionError::InvalidTransition {
            index: 2,
            field: TransitionField::Symbol('3'),
        };
        assert_eq!(
            "Transition of index 2 is invalid! Symbol '3' is not in alphabet",
            err.to_string()
        );

        let err = DefinitionError::InvalidTransition {
            index: 0,
            field: TransitionField::ToState("abc".to_string()),
        };
        assert_eq!(
            "Transition of index 0 is invalid! ToState 'abc' is not in the list of states",
            err.to_string()
        );
    }

    #[test]
    fn test_no_transition_is_transparent() {
        let err: EvaluationError = NoTransition {
            state: "s1".to_string(),
            symbol: '5',
        }
        .into();
        assert_eq!(
            "There is no transition for the state 's1' and symbol '5'",
            err.to_string()
        );
    }

    #[test]
    fn test_parse_error_message() {
        let err = ParseError::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::Pipe,
            literal: "|".to_string(),
            position: Position::new(1, 7),
        };
        assert_eq!(
            "Expected token type ';', got '|' ('|') at 1:7",
            err.to_string()
        );
    }

    #[test]
    fn test_definition_error_source() {
        use std::error::Error;

        let err = ParseError::Definition {
            error: DefinitionError::InvalidStartState("s9".to_string()),
            literal: "s9".to_string(),
            position: Position::new(4, 2),
        };
        assert_eq!(
            "Start state 's9' is not in the list of states at 4:2",
            err.to_string()
        );
        assert_eq!(
            "Start state 's9' is not in the list of states",
            err.source().unwrap().to_string()
        );
    }
}
