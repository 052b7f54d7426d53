//! Plain-data automaton definitions.
//!
//! A definition is the unvalidated 5-tuple as a host supplies it: in code,
//! or loaded from JSON. [`AutomatonDefinition::build`] turns it into a
//! runnable [`FiniteAutomaton`]; [`AutomatonDefinition::audit`] reports
//! every defect at once instead of stopping at the first.

use super::dfa::FiniteAutomaton;
use super::error::{ConfigError, DefinitionError};
use super::state::State;
use super::validate::{check_invariants, TransitionTable};
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// The 5-tuple (Q, Σ, q0, F, δ) as plain data.
///
/// Sequence order matters: validation walks states, symbols and accepting
/// states in the order given here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct AutomatonDefinition<S: State> {
    /// Q: declared states
    pub states: Vec<S>,
    /// Σ: input symbols
    pub alphabet: Vec<char>,
    /// q0
    pub initial_state: S,
    /// F
    pub accepting_states: Vec<S>,
    /// δ: current state -> symbol -> next state
    pub transitions: TransitionTable<S>,
}

impl<S: State> AutomatonDefinition<S> {
    /// Validate and build the automaton, failing on the first violation.
    pub fn build(self) -> Result<FiniteAutomaton<S>, ConfigError> {
        FiniteAutomaton::new(
            self.states,
            self.alphabet,
            self.initial_state,
            self.accepting_states,
            self.transitions,
        )
    }

    /// Run every construction check, accumulating ALL violations.
    ///
    /// Violations are reported in the same order [`build`](Self::build)
    /// would encounter them, so the first one is always the error `build`
    /// returns.
    pub fn audit(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        let _ = check_invariants(
            &self.states,
            &self.alphabet,
            &self.initial_state,
            &self.accepting_states,
            &self.transitions,
            |err| {
                checks.push(Validation::fail(err));
                ControlFlow::Continue(())
            },
        );

        Validation::all_vec(checks).map(|_| ())
    }

    /// Parse a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(json).map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))
    }

    /// Render the definition as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }
}
