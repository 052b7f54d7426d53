//! Binary modulo-three calculation on top of the automaton engine.
//!
//! The automaton reads a binary number most-significant bit first. Its
//! state is the remainder of the prefix read so far: reading bit `b` in
//! remainder `r` moves to `(2r + b) mod 3`. The number is never converted to
//! a machine integer, so inputs of any length are fine.
//!
//! # Example
//!
//! ```rust
//! use modfsm::modthree::{mod_three_definition, ModThreeCalculator, ModuloCalculator};
//!
//! let calculator = ModThreeCalculator::new(mod_three_definition()).unwrap();
//!
//! assert_eq!(calculator.calculate("1101").unwrap(), 1); // 13 mod 3
//! assert_eq!(calculator.calculate_with_sentinel("1A01").0, -1);
//! ```

mod calculator;
mod error;
mod table;

pub use calculator::{ModThreeCalculator, ModuloCalculator, SENTINEL_REMAINDER};
pub use error::CalculatorError;
pub use table::ModThreeTable;

use crate::core::{AutomatonDefinition, TransitionTable};
use std::collections::BTreeMap;

/// Input symbols: binary digits.
pub const ALPHABET: [char; 2] = ['0', '1'];

crate::state_enum! {
    /// Remainder of the binary prefix read so far.
    pub enum ModThreeState {
        /// Remainder 0
        S0,
        /// Remainder 1
        S1,
        /// Remainder 2
        S2,
    }
}

impl ModThreeState {
    /// The remainder this state stands for.
    pub const fn remainder(self) -> u32 {
        match self {
            Self::S0 => 0,
            Self::S1 => 1,
            Self::S2 => 2,
        }
    }
}

/// The modulo-three automaton as plain data.
///
/// Every state is accepting: whichever state the input ends in is the
/// remainder.
pub fn mod_three_definition() -> AutomatonDefinition<ModThreeState> {
    use ModThreeState::{S0, S1, S2};

    let row = |on_zero, on_one| BTreeMap::from([('0', on_zero), ('1', on_one)]);

    AutomatonDefinition {
        states: vec![S0, S1, S2],
        alphabet: ALPHABET.to_vec(),
        initial_state: S0,
        accepting_states: vec![S0, S1, S2],
        transitions: TransitionTable::from([
            (S0, row(S0, S1)),
            (S1, row(S2, S0)),
            (S2, row(S1, S2)),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn states_map_to_their_remainders() {
        assert_eq!(ModThreeState::S0.remainder(), 0);
        assert_eq!(ModThreeState::S1.remainder(), 1);
        assert_eq!(ModThreeState::S2.remainder(), 2);
        assert_eq!(ModThreeState::S2.name(), "S2");
    }

    #[test]
    fn definition_doubles_and_adds() {
        let definition = mod_three_definition();

        for &state in ModThreeState::variants() {
            for (bit, symbol) in ALPHABET.iter().enumerate() {
                let next = definition.transitions[&state][symbol];
                assert_eq!(
                    next.remainder(),
                    (2 * state.remainder() + bit as u32) % 3,
                    "{state} on {symbol}"
                );
            }
        }
    }

    #[test]
    fn definition_passes_audit() {
        assert!(mod_three_definition().audit().is_success());
    }

    #[test]
    fn definition_roundtrips_through_json() {
        let definition = mod_three_definition();

        let json = definition.to_json().unwrap();
        let restored = AutomatonDefinition::<ModThreeState>::from_json(&json).unwrap();

        assert_eq!(definition, restored);
    }
}
