//! Map-backed deterministic finite automaton.

use super::automaton::Automaton;
use super::error::{ConfigError, ExecutionError};
use super::state::State;
use super::trace::{RunTrace, Step};
use super::validate::{first_violation, TransitionTable};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A deterministic finite automaton: the 5-tuple (Q, Σ, q0, F, δ).
///
/// Built through [`FiniteAutomaton::new`], which proves that the initial
/// state and every accepting state are declared, and that δ is total over
/// the declared states and alphabet and closed over the declared states.
/// The fields are private, so those invariants hold for the lifetime of the
/// value.
#[derive(Clone, Debug)]
pub struct FiniteAutomaton<S: State> {
    states: HashSet<S>,
    alphabet: HashSet<char>,
    initial: S,
    accepting: HashSet<S>,
    transitions: HashMap<S, HashMap<char, S>>,
}

impl<S: State> FiniteAutomaton<S> {
    /// Validate the 5-tuple and build the automaton.
    ///
    /// Returns the first violated invariant; see [`ConfigError`] for the
    /// possible failures and [`AutomatonDefinition::audit`] for a report
    /// of all of them.
    ///
    /// [`AutomatonDefinition::audit`]: crate::core::AutomatonDefinition::audit
    pub fn new(
        states: impl IntoIterator<Item = S>,
        alphabet: impl IntoIterator<Item = char>,
        initial_state: S,
        accepting_states: impl IntoIterator<Item = S>,
        transitions: TransitionTable<S>,
    ) -> Result<Self, ConfigError> {
        let states: Vec<S> = states.into_iter().collect();
        let alphabet: Vec<char> = alphabet.into_iter().collect();
        let accepting_states: Vec<S> = accepting_states.into_iter().collect();

        if let Some(err) = first_violation(
            &states,
            &alphabet,
            &initial_state,
            &accepting_states,
            &transitions,
        ) {
            debug!(%err, invariant = ?err.invariant(), "rejected automaton configuration");
            return Err(err);
        }

        let automaton = Self::from_parts_unchecked(
            states,
            alphabet,
            initial_state,
            accepting_states,
            transitions,
        );
        debug!(
            states = automaton.states.len(),
            symbols = automaton.alphabet.len(),
            initial = automaton.initial.name(),
            "built finite automaton"
        );
        Ok(automaton)
    }

    /// Assemble an automaton without checking any invariant.
    ///
    /// Runs of such an automaton can fail with
    /// [`ExecutionError::MissingStateRow`] or
    /// [`ExecutionError::UnknownSymbol`] even for symbols of its declared
    /// alphabet.
    pub fn from_parts_unchecked(
        states: impl IntoIterator<Item = S>,
        alphabet: impl IntoIterator<Item = char>,
        initial_state: S,
        accepting_states: impl IntoIterator<Item = S>,
        transitions: TransitionTable<S>,
    ) -> Self {
        Self {
            states: states.into_iter().collect(),
            alphabet: alphabet.into_iter().collect(),
            initial: initial_state,
            accepting: accepting_states.into_iter().collect(),
            transitions: transitions
                .into_iter()
                .map(|(state, row)| (state, row.into_iter().collect()))
                .collect(),
        }
    }

    /// The declared states.
    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    /// The input alphabet.
    pub fn alphabet(&self) -> &HashSet<char> {
        &self.alphabet
    }

    /// The state every run starts from.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// The accepting states.
    pub fn accepting_states(&self) -> &HashSet<S> {
        &self.accepting
    }

    /// δ(state, symbol), if defined.
    pub fn next_state(&self, state: &S, symbol: char) -> Option<&S> {
        self.transitions.get(state)?.get(&symbol)
    }

    /// Run `input` and keep every step taken.
    ///
    /// Fails exactly where [`Automaton::run`] fails.
    pub fn run_traced(&self, input: &str) -> Result<RunTrace<S>, ExecutionError> {
        let mut trace = RunTrace::new(self.initial.clone());
        let mut current = &self.initial;

        for symbol in input.chars() {
            let next = self.step(current, symbol)?;
            trace.push(Step {
                from: current.clone(),
                symbol,
                to: next.clone(),
            });
            current = next;
        }

        Ok(trace)
    }

    fn step(&self, current: &S, symbol: char) -> Result<&S, ExecutionError> {
        let row = self
            .transitions
            .get(current)
            .ok_or_else(|| ExecutionError::MissingStateRow {
                state: current.name().to_string(),
            })?;

        row.get(&symbol)
            .ok_or_else(|| ExecutionError::UnknownSymbol {
                state: current.name().to_string(),
                symbol,
            })
    }
}

impl<S: State> Automaton for FiniteAutomaton<S> {
    type State = S;

    fn run(&self, input: &str) -> Result<S, ExecutionError> {
        input
            .chars()
            .try_fold(&self.initial, |current, symbol| self.step(current, symbol))
            .cloned()
    }

    fn is_accepting(&self, state: &S) -> bool {
        self.accepting.contains(state)
    }

    fn validate_input(&self, input: &str) -> bool {
        input.chars().all(|symbol| self.alphabet.contains(&symbol))
    }
}
