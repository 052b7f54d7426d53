//! Modfsm: validated deterministic finite automata, and N mod 3 with one.
//!
//! The crate has two layers:
//!
//! - [`core`]: a generic DFA engine. An automaton is the 5-tuple
//!   (states, alphabet, initial state, accepting states, transitions). It is
//!   validated once at construction (the transition function must be total
//!   and closed) and is read-only afterwards, so any number of runs may share
//!   it.
//! - [`modthree`]: a configuration of that engine which computes the
//!   remainder of a binary number divided by three, one bit at a time,
//!   without ever converting the input to a machine integer.
//!
//! # Example
//!
//! ```rust
//! use modfsm::core::{Automaton, AutomatonDefinition, TransitionTable};
//! use modfsm::modthree::{mod_three_definition, ModThreeCalculator, ModuloCalculator};
//! use std::collections::BTreeMap;
//!
//! // A generic automaton over string states.
//! let definition = AutomatonDefinition {
//!     states: vec!["even".to_string(), "odd".to_string()],
//!     alphabet: vec!['a', 'b'],
//!     initial_state: "even".to_string(),
//!     accepting_states: vec!["even".to_string()],
//!     transitions: TransitionTable::from([
//!         (
//!             "even".to_string(),
//!             BTreeMap::from([('a', "odd".to_string()), ('b', "even".to_string())]),
//!         ),
//!         (
//!             "odd".to_string(),
//!             BTreeMap::from([('a', "even".to_string()), ('b', "odd".to_string())]),
//!         ),
//!     ]),
//! };
//! let automaton = definition.build().unwrap();
//! let terminal = automaton.run("abab").unwrap();
//! assert!(automaton.is_accepting(&terminal));
//!
//! // The modulo-three calculator.
//! let calculator = ModThreeCalculator::new(mod_three_definition()).unwrap();
//! assert_eq!(calculator.calculate("110").unwrap(), 0);
//! ```

mod macros;

pub mod core;
pub mod modthree;

// Re-export commonly used types
pub use crate::core::{
    Automaton, AutomatonDefinition, ConfigError, ExecutionError, FiniteAutomaton, State,
};
pub use crate::modthree::{CalculatorError, ModThreeCalculator, ModThreeState, ModuloCalculator};
