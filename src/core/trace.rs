//! Step-by-step record of a single automaton run.

use super::state::State;
use serde::{Deserialize, Serialize};

/// One consumed symbol: the state it was read in and the state it led to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Step<S: State> {
    /// The state the symbol was read in
    pub from: S,
    /// The symbol consumed
    pub symbol: char,
    /// The state the transition led to
    pub to: S,
}

/// Ordered record of the steps taken by one run.
///
/// A trace always knows the state it started from, so the trace of the
/// empty input still has a final state.
///
/// # Example
///
/// ```rust
/// use modfsm::core::{AutomatonDefinition, TransitionTable};
/// use std::collections::BTreeMap;
///
/// let definition = AutomatonDefinition {
///     states: vec!["even".to_string(), "odd".to_string()],
///     alphabet: vec!['1'],
///     initial_state: "even".to_string(),
///     accepting_states: vec!["even".to_string()],
///     transitions: TransitionTable::from([
///         ("even".to_string(), BTreeMap::from([('1', "odd".to_string())])),
///         ("odd".to_string(), BTreeMap::from([('1', "even".to_string())])),
///     ]),
/// };
/// let automaton = definition.build().unwrap();
///
/// let trace = automaton.run_traced("11").unwrap();
/// assert_eq!(trace.len(), 2);
/// assert_eq!(trace.final_state(), "even");
/// assert_eq!(trace.path(), vec!["even", "odd", "even"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RunTrace<S: State> {
    initial: S,
    steps: Vec<Step<S>>,
}

impl<S: State> RunTrace<S> {
    /// Create an empty trace starting at `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, step: Step<S>) {
        self.steps.push(step);
    }

    /// The state the run started from.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// All steps in the order they were taken.
    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    /// The terminal state of the run.
    pub fn final_state(&self) -> &S {
        self.steps.last().map_or(&self.initial, |step| &step.to)
    }

    /// The initial state followed by the target of every step.
    pub fn path(&self) -> Vec<&S> {
        std::iter::once(&self.initial)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }

    /// Number of symbols consumed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
