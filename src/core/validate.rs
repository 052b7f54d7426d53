//! Construction-time invariant checks.
//!
//! The checks run in a fixed order: initial-state membership, accepting
//! subset, then one transition row per declared state (in declared order),
//! walking the alphabet in declared order and checking each target as it
//! goes. Every violation is handed to `report`, which decides whether to
//! keep going. The validating constructor stops at the first one; the audit
//! collects them all.

use super::error::ConfigError;
use super::state::State;
use std::collections::{BTreeMap, HashSet};
use std::ops::ControlFlow;

/// Two-level transition map: current state, then symbol, then next state.
pub type TransitionTable<S> = BTreeMap<S, BTreeMap<char, S>>;

pub(crate) fn check_invariants<S, F>(
    states: &[S],
    alphabet: &[char],
    initial_state: &S,
    accepting_states: &[S],
    transitions: &TransitionTable<S>,
    mut report: F,
) -> ControlFlow<()>
where
    S: State,
    F: FnMut(ConfigError) -> ControlFlow<()>,
{
    let declared: HashSet<&S> = states.iter().collect();

    if !declared.contains(initial_state) {
        report(ConfigError::InitialStateUndeclared {
            state: initial_state.name().to_string(),
        })?;
    }

    for state in accepting_states {
        if !declared.contains(state) {
            report(ConfigError::AcceptingStateUndeclared {
                state: state.name().to_string(),
            })?;
        }
    }

    for state in states {
        let Some(row) = transitions.get(state) else {
            report(ConfigError::MissingStateRow {
                state: state.name().to_string(),
            })?;
            continue;
        };

        for &symbol in alphabet {
            match row.get(&symbol) {
                None => report(ConfigError::MissingTransition {
                    state: state.name().to_string(),
                    symbol,
                })?,
                Some(target) if !declared.contains(target) => {
                    report(ConfigError::UndeclaredTarget {
                        state: state.name().to_string(),
                        symbol,
                        target: target.name().to_string(),
                    })?
                }
                Some(_) => {}
            }
        }
    }

    ControlFlow::Continue(())
}

/// First violation in check order, if any.
pub(crate) fn first_violation<S: State>(
    states: &[S],
    alphabet: &[char],
    initial_state: &S,
    accepting_states: &[S],
    transitions: &TransitionTable<S>,
) -> Option<ConfigError> {
    let mut first = None;
    let _ = check_invariants(
        states,
        alphabet,
        initial_state,
        accepting_states,
        transitions,
        |err| {
            first = Some(err);
            ControlFlow::Break(())
        },
    );
    first
}
