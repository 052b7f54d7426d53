//! Calculation errors.

use crate::core::{ConfigError, ExecutionError};
use thiserror::Error;

/// Errors that can occur when building a calculator or calculating a
/// remainder.
///
/// Engine errors are wrapped, never discarded: the engine error is both
/// part of the message and available as the [`source`](std::error::Error::source).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("failed to initialize FSM engine: {0}")]
    Init(#[source] ConfigError),

    /// `position` counts chars, not bytes.
    #[error("invalid input {input:?}: symbol '{symbol}' at position {position} is not '0' or '1'")]
    InvalidInput {
        input: String,
        symbol: char,
        position: usize,
    },

    #[error("FSM execution failed: {0}")]
    Execution(#[from] ExecutionError),

    #[error("FSM execution ended in non-accepting state '{state}'")]
    NonAccepting { state: String },
}
