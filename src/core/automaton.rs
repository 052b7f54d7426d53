//! The capability set every runnable automaton provides.

use super::error::ExecutionError;
use super::state::State;

/// A runnable automaton.
///
/// Consumers such as calculators depend on this trait rather than on a
/// concrete engine, so a map-backed automaton and a dense table are
/// interchangeable.
///
/// Implementations hold no per-run state: every call to [`run`](Self::run)
/// starts from the initial state, and shared references may be used from many
/// threads at once.
pub trait Automaton: Send + Sync {
    /// State identifier produced by a run.
    type State: State;

    /// Consume `input` one `char` at a time and return the terminal state.
    ///
    /// The empty input yields the initial state. The first failing lookup
    /// aborts the run.
    fn run(&self, input: &str) -> Result<Self::State, ExecutionError>;

    /// Whether `state` is one of the accepting states.
    ///
    /// Unknown states are simply not accepting.
    fn is_accepting(&self, state: &Self::State) -> bool;

    /// Whether every symbol of `input` belongs to the alphabet.
    ///
    /// The empty input is always valid.
    fn validate_input(&self, input: &str) -> bool;
}

impl<A: Automaton + ?Sized> Automaton for Box<A> {
    type State = A::State;

    fn run(&self, input: &str) -> Result<Self::State, ExecutionError> {
        (**self).run(input)
    }

    fn is_accepting(&self, state: &Self::State) -> bool {
        (**self).is_accepting(state)
    }

    fn validate_input(&self, input: &str) -> bool {
        (**self).validate_input(input)
    }
}
