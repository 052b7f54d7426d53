//! Array-backed modulo-three automaton.

use super::ModThreeState::{self, S0, S1, S2};
use crate::core::{Automaton, ExecutionError, State};

/// Next state, indexed by `[state][bit]`.
const TRANSITIONS: [[ModThreeState; 2]; 3] = [[S0, S1], [S2, S0], [S1, S2]];

/// The modulo-three automaton as a fixed `3 × 2` table.
///
/// Behaves exactly like the map-backed engine built from
/// [`mod_three_definition`](super::mod_three_definition), but every step is
/// two array indexings instead of two hash lookups. The table is fixed at
/// compile time, so there is nothing to validate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModThreeTable;

fn state_index(state: ModThreeState) -> usize {
    match state {
        S0 => 0,
        S1 => 1,
        S2 => 2,
    }
}

fn bit(symbol: char) -> Option<usize> {
    match symbol {
        '0' => Some(0),
        '1' => Some(1),
        _ => None,
    }
}

impl Automaton for ModThreeTable {
    type State = ModThreeState;

    fn run(&self, input: &str) -> Result<ModThreeState, ExecutionError> {
        input.chars().try_fold(S0, |current, symbol| {
            bit(symbol)
                .map(|column| TRANSITIONS[state_index(current)][column])
                .ok_or_else(|| ExecutionError::UnknownSymbol {
                    state: current.name().to_string(),
                    symbol,
                })
        })
    }

    fn is_accepting(&self, _state: &ModThreeState) -> bool {
        true
    }

    fn validate_input(&self, input: &str) -> bool {
        input.chars().all(|symbol| bit(symbol).is_some())
    }
}
