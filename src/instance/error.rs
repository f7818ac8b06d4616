//! Errors raised by transitions.

use thiserror::Error;

/// Errors that can occur when moving to another state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// Positional value count differs from the fields the target declares.
    #[error("State '{state}' expects {expected} value(s), got {found}")]
    Arity {
        state: String,
        expected: usize,
        found: usize,
    },

    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    /// Only raised under `SurplusArguments::Reject`.
    #[error("State '{state}' carries no data, got {found} value(s)")]
    SurplusArguments { state: String, found: usize },
}
