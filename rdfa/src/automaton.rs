//! The automaton itself: a validated, immutable transition table.

use crate::error::{DefinitionError, EvaluationError, NoTransition, TransitionField};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of the transition table: reading `symbol` in `from_state` leads to `to_state`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transition {
    pub from_state: String,
    pub symbol: char,
    pub to_state: String,
}

impl Transition {
    pub fn new(from_state: impl Into<String>, symbol: char, to_state: impl Into<String>) -> Transition {
        Transition {
            from_state: from_state.into(),
            symbol,
            to_state: to_state.into(),
        }
    }

    fn leaves(&self, state: &str, symbol: char) -> bool {
        self.from_state == state && self.symbol == symbol
    }
}

/// A deterministic finite automaton.
///
/// An `Automaton` can only be obtained through [`Automaton::new`], which
/// checks that every transition, the start state and the accept states refer
/// to declared states and symbols. It is never modified afterwards, so it can
/// be shared freely between threads.
///
/// The transition table may be partial. Running an input that needs a
/// missing transition fails with [`EvaluationError::NoTransition`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<String>,
    alphabet: Vec<char>,
    transitions: Vec<Transition>,
    start_state: String,
    accept_states: Vec<String>,
    name: Option<String>,
}

fn contains(states: &[String], state: &str) -> bool {
    states.iter().any(|s| s == state)
}

fn validate_states(states: &[String]) -> Result<(), DefinitionError> {
    match states.iter().position(|state| state.is_empty()) {
        Some(index) => Err(DefinitionError::InvalidState { index }),
        None => Ok(()),
    }
}

fn validate_transitions(
    states: &[String],
    alphabet: &[char],
    transitions: &[Transition],
) -> Result<(), DefinitionError> {
    for (index, transition) in transitions.iter().enumerate() {
        let field = if !contains(states, &transition.from_state) {
            TransitionField::FromState(transition.from_state.clone())
        } else if !alphabet.contains(&transition.symbol) {
            TransitionField::Symbol(transition.symbol)
        } else if !contains(states, &transition.to_state) {
            TransitionField::ToState(transition.to_state.clone())
        } else {
            continue;
        };

        return Err(DefinitionError::InvalidTransition { index, field });
    }

    Ok(())
}

fn validate_accept_states(states: &[String], accept_states: &[String]) -> Result<(), DefinitionError> {
    match accept_states.iter().find(|state| !contains(states, state)) {
        Some(state) => Err(DefinitionError::InvalidAcceptState(state.clone())),
        None => Ok(()),
    }
}

/// Duplicated keys are legal but only the first one can ever be taken.
fn warn_duplicate_transitions(transitions: &[Transition]) {
    for (index, transition) in transitions.iter().enumerate() {
        let shadowed_by = transitions[..index]
            .iter()
            .position(|t| t.leaves(&transition.from_state, transition.symbol));

        if let Some(earlier) = shadowed_by {
            log::warn!(
                "transition of index {} from state '{}' with symbol '{}' is shadowed by transition of index {}",
                index,
                transition.from_state,
                transition.symbol,
                earlier
            );
        }
    }
}

impl Automaton {
    /// Validates a definition and builds the automaton out of it.
    ///
    /// Checks run in order and stop at the first failure: states, then
    /// transitions (in table order, looking at the source state, the symbol
    /// and the target state in that order), then the start state, then the
    /// accept states.
    pub fn new(
        states: Vec<String>,
        alphabet: Vec<char>,
        transitions: Vec<Transition>,
        start_state: impl Into<String>,
        accept_states: Vec<String>,
    ) -> Result<Automaton, DefinitionError> {
        let start_state = start_state.into();

        validate_states(&states)?;
        validate_transitions(&states, &alphabet, &transitions)?;
        if !contains(&states, &start_state) {
            return Err(DefinitionError::InvalidStartState(start_state));
        }
        validate_accept_states(&states, &accept_states)?;

        warn_duplicate_transitions(&transitions);

        log::debug!(
            "automaton built with {} states, {} symbols and {} transitions",
            states.len(),
            alphabet.len(),
            transitions.len()
        );

        Ok(Automaton {
            states,
            alphabet,
            transitions,
            start_state,
            accept_states,
            name: None,
        })
    }

    /// Gives the automaton a name, used when reporting results.
    pub fn named(mut self, name: impl Into<String>) -> Automaton {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn start_state(&self) -> &str {
        &self.start_state
    }

    pub fn accept_states(&self) -> &[String] {
        &self.accept_states
    }

    pub fn is_accept_state(&self, state: &str) -> bool {
        contains(&self.accept_states, state)
    }

    /// Returns the state reached from `state` when reading `symbol`.
    ///
    /// The table is scanned in declaration order and the first matching row
    /// wins.
    pub fn next_state(&self, state: &str, symbol: char) -> Result<&str, NoTransition> {
        self.transitions
            .iter()
            .find(|transition| transition.leaves(state, symbol))
            .map(|transition| transition.to_state.as_str())
            .ok_or_else(|| NoTransition {
                state: state.to_owned(),
                symbol,
            })
    }

    /// Runs `input` from the start state and tells whether it ends in an
    /// accept state.
    ///
    /// Stops at the first symbol that is not in the alphabet or that has no
    /// transition from the current state. An error always means the input is
    /// not accepted.
    pub fn check(&self, input: &str) -> Result<bool, EvaluationError> {
        let mut state = self.start_state.as_str();

        for symbol in input.chars() {
            if !self.alphabet.contains(&symbol) {
                return Err(EvaluationError::SymbolNotInAlphabet(symbol));
            }

            let next = self.next_state(state, symbol)?;
            log::trace!("{} --{}--> {}", state, symbol, next);
            state = next;
        }

        Ok(self.is_accept_state(state))
    }
}
