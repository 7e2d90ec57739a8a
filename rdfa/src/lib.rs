//! This library builds deterministic finite automata, checks that they make
//! sense and runs strings through them.
//!
//! Here's an automaton accepting binary numbers with an even number of ones:
//! ```
//! use rdfa::{Automaton, EvaluationError, Transition};
//!
//! let even_ones = Automaton::new(
//!     vec!["even".to_string(), "odd".to_string()],
//!     vec!['0', '1'],
//!     vec![
//!         Transition::new("even", '0', "even"),
//!         Transition::new("even", '1', "odd"),
//!         Transition::new("odd", '0', "odd"),
//!         Transition::new("odd", '1', "even"),
//!     ],
//!     "even",
//!     vec!["even".to_string()],
//! )
//! .unwrap();
//!
//! assert_eq!(Ok(true), even_ones.check("0110"));
//! assert_eq!(Ok(false), even_ones.check("0111"));
//!
//! // Symbols outside of the alphabet stop the run
//! assert_eq!(Err(EvaluationError::SymbolNotInAlphabet('2')), even_ones.check("12"));
//! ```
//!
//! The same automaton can be written with the notation understood by
//! [`parse`]:
//! ```
//! let even_ones = rdfa::parse(
//!     "even, odd; 0, 1; even,0,even | even,1,odd | odd,0,odd | odd,1,even; even; even",
//! )
//! .unwrap();
//!
//! assert_eq!(Ok(true), even_ones.check("11"));
//! ```
//!
//! Run `cargo run --example divisible-by-three` to see a more complete example.

mod audit;
mod automaton;
pub mod chars;
mod error;
mod parser;
mod token;
mod tokenizer;

pub use crate::audit::Finding;
pub use crate::automaton::{Automaton, Transition};
pub use crate::error::{DefinitionError, EvaluationError, NoTransition, ParseError, TransitionField};
pub use crate::parser::{parse, Parser};
pub use crate::token::{Position, Token, TokenKind, EOF_LITERAL};
pub use crate::tokenizer::Tokenizer;
