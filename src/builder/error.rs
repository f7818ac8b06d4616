//! Configuration errors raised while declaring states.

use thiserror::Error;

/// Errors that can occur when parsing declarations into a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("No states declared. Pass at least one state declaration")]
    NoStates,

    #[error("Initial state '{state}' cannot carry data")]
    InitialStateCarriesData { state: String },

    #[error("Invalid state declaration '{declaration}': {reason}")]
    InvalidDeclaration { declaration: String, reason: String },

    #[error("States '{first}' and '{second}' both generate '{method}'")]
    GeneratedNameCollision {
        method: String,
        first: String,
        second: String,
    },

    #[error("State name '{state}' is reserved for the catch-all clause")]
    ReservedStateName { state: String },
}
