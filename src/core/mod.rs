//! Generic deterministic finite automaton engine.
//!
//! This module contains everything that does not know about any particular
//! automaton:
//! - State identifiers via the `State` trait
//! - The `Automaton` capability set (run, acceptance, input validation)
//! - The validating map-backed `FiniteAutomaton`
//! - Plain-data `AutomatonDefinition`s with an accumulating audit
//! - Step-by-step `RunTrace`s
//!
//! All logic in this module is pure: nothing blocks, performs I/O, or keeps
//! state between runs.

mod automaton;
mod definition;
mod dfa;
mod error;
mod state;
mod trace;
mod validate;

pub use automaton::Automaton;
pub use definition::AutomatonDefinition;
pub use dfa::FiniteAutomaton;
pub use error::{ConfigError, DefinitionError, ExecutionError, Invariant};
pub use state::State;
pub use trace::{RunTrace, Step};
pub use validate::TransitionTable;
