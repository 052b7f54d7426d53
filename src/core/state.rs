//! State identifiers for finite automata.
//!
//! The engine is generic over the identifier type so the same validation
//! and execution code serves free-form configurations (plain strings) and
//! closed domain enumerations alike.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton state identifiers.
///
/// All methods are pure. A state is an immutable label; the automaton never
/// stores per-run data in it.
///
/// # Required Traits
///
/// - `Clone`: the terminal state is handed back to the caller by value
/// - `Eq` + `Hash`: states key the transition table
/// - `Ord`: definitions keep a deterministic order when serialized
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: definitions are loadable from JSON
/// - `Send` + `Sync`: one automaton may serve many threads
///
/// # Example
///
/// ```rust
/// use modfsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
/// enum Parity {
///     Even,
///     Odd,
/// }
///
/// impl State for Parity {
///     fn name(&self) -> &str {
///         match self {
///             Self::Even => "Even",
///             Self::Odd => "Odd",
///         }
///     }
/// }
///
/// assert_eq!(Parity::Odd.name(), "Odd");
/// ```
pub trait State:
    Clone + Eq + Ord + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display and error reporting.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}
