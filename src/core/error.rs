//! Errors raised while building and running automata.

use thiserror::Error;

/// The construction invariant a [`ConfigError`] violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invariant {
    /// The initial state is a member of the declared states.
    InitialState,
    /// Every accepting state is a member of the declared states.
    AcceptingSubset,
    /// Every declared state has a transition on every declared symbol.
    Totality,
    /// Every transition target is a declared state.
    Closure,
}

/// Errors that can occur when constructing an automaton.
///
/// All of them are permanent: building again from the same data reproduces
/// the same error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Initial state '{state}' is not defined in the set of states")]
    InitialStateUndeclared { state: String },

    #[error("Accepting state '{state}' is not defined in the set of states")]
    AcceptingStateUndeclared { state: String },

    #[error("Missing transition rules for state '{state}'")]
    MissingStateRow { state: String },

    #[error("Missing transition for state '{state}' on symbol '{symbol}'")]
    MissingTransition { state: String, symbol: char },

    #[error("Transition from '{state}' on '{symbol}' leads to undefined state '{target}'")]
    UndeclaredTarget {
        state: String,
        symbol: char,
        target: String,
    },
}

impl ConfigError {
    /// Which invariant this error violates.
    pub fn invariant(&self) -> Invariant {
        match self {
            Self::InitialStateUndeclared { .. } => Invariant::InitialState,
            Self::AcceptingStateUndeclared { .. } => Invariant::AcceptingSubset,
            Self::MissingStateRow { .. } | Self::MissingTransition { .. } => Invariant::Totality,
            Self::UndeclaredTarget { .. } => Invariant::Closure,
        }
    }

    /// The identifier that caused the violation: a state, a symbol, or a
    /// transition target.
    pub fn offending(&self) -> String {
        match self {
            Self::InitialStateUndeclared { state }
            | Self::AcceptingStateUndeclared { state }
            | Self::MissingStateRow { state } => state.clone(),
            Self::MissingTransition { symbol, .. } => symbol.to_string(),
            Self::UndeclaredTarget { target, .. } => target.clone(),
        }
    }
}

/// Errors that can occur while running an automaton over an input.
///
/// Execution stops at the first one; no partial state is reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("Transition rule missing for state '{state}'")]
    MissingStateRow { state: String },

    #[error("Invalid input symbol '{symbol}' for state '{state}'")]
    UnknownSymbol { state: String, symbol: char },
}

/// Errors that can occur when loading or saving an automaton definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}
