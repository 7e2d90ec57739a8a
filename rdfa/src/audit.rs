//! Structural report on an already valid automaton.
//!
//! Construction accepts partial tables and duplicated keys. The audit points
//! them out without rejecting anything, which is what a tool wants before
//! trusting a hand-written definition.

use crate::automaton::Automaton;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Finding {
    /// No transition leaves `state` on `symbol`.
    MissingTransition { state: String, symbol: char },
    /// Several transitions leave `state` on `symbol`, only the first is ever taken.
    DuplicateTransition {
        state: String,
        symbol: char,
        count: usize,
    },
    /// No transition leads to `state` and it is not the start state.
    NoIncomingTransition { state: String },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Finding::MissingTransition { state, symbol } => write!(
                f,
                "transition from state '{}' with symbol '{}' does not exist",
                state, symbol
            ),
            Finding::DuplicateTransition {
                state,
                symbol,
                count,
            } => write!(
                f,
                "a total of {} transitions were found from state '{}' with symbol '{}'",
                count, state, symbol
            ),
            Finding::NoIncomingTransition { state } => {
                write!(f, "there is no transition to state '{}'", state)
            }
        }
    }
}

/// Keeps the first occurrence of each value, in order.
fn distinct<T: PartialEq + Clone>(values: &[T]) -> Vec<T> {
    let mut seen: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(value) {
            seen.push(value.clone());
        }
    }
    seen
}

impl Automaton {
    /// Lists what keeps this automaton from being a complete DFA.
    ///
    /// Findings come state by state in declaration order: first the missing
    /// or duplicated transitions for each symbol of the alphabet, then whether
    /// the state can be entered at all. An empty list means every state has
    /// exactly one transition per symbol.
    pub fn audit(&self) -> Vec<Finding> {
        let mut findings = Vec::new();

        for state in distinct(self.states()) {
            for symbol in distinct(self.alphabet()) {
                let count = self
                    .transitions()
                    .iter()
                    .filter(|t| t.from_state == state && t.symbol == symbol)
                    .count();

                match count {
                    0 => findings.push(Finding::MissingTransition {
                        state: state.clone(),
                        symbol,
                    }),
                    1 => {}
                    _ => findings.push(Finding::DuplicateTransition {
                        state: state.clone(),
                        symbol,
                        count,
                    }),
                }
            }

            let entered = state == self.start_state()
                || self.transitions().iter().any(|t| t.to_state == state);
            if !entered {
                findings.push(Finding::NoIncomingTransition { state });
            }
        }

        log::debug!("audit found {} problems", findings.len());

        findings
    }
}
