//! Crate-wide error type.

use crate::builder::error::ConfigurationError;
use crate::dispatch::UnhandledStateError;
use crate::instance::TransitionError;
use thiserror::Error;

/// Any error raised by this crate.
///
/// Each operation returns its own precise error; this enum lets callers
/// chain construction, transitions and dispatch with `?`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Unhandled(#[from] UnhandledStateError),
}
