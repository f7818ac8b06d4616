//! Exhaustive dispatch over the current state.
//!
//! A `Cases` table maps state names to handlers, plus an optional catch-all
//! registered under the reserved `CATCH_ALL` key. Exactly one handler runs
//! per dispatch.

use crate::core::Payload;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Reserved key of the catch-all clause.
///
/// A state may still be declared with this name unless
/// `Options::reserve_catch_all` is set; its own handler then takes
/// precedence while it is current.
pub const CATCH_ALL: &str = "_";

type Handler<'a, R> = Box<dyn FnOnce(Option<&Payload>) -> R + 'a>;

/// Raised when neither the current state nor the catch-all has a handler.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("No matching clause for current state '{state}'")]
pub struct UnhandledStateError {
    pub state: String,
}

/// Handler table for `StateInstance::case_of`.
///
/// Registering the same key twice keeps the later handler.
pub struct Cases<'a, R> {
    handlers: HashMap<String, Handler<'a, R>>,
}

impl<'a, R> Cases<'a, R> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Handle `state`; the handler receives the state's payload.
    pub fn on<F>(mut self, state: impl Into<String>, handler: F) -> Self
    where
        F: FnOnce(Option<&Payload>) -> R + 'a,
    {
        self.handlers.insert(state.into(), Box::new(handler));
        self
    }

    /// Handle every state without its own clause.
    pub fn otherwise<F>(self, handler: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        self.on(CATCH_ALL, move |_| handler())
    }

    /// Whether a clause is registered under `key`.
    pub fn handles(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    pub fn has_catch_all(&self) -> bool {
        self.handles(CATCH_ALL)
    }

    pub(crate) fn dispatch(
        mut self,
        state: &str,
        payload: Option<&Payload>,
    ) -> Result<R, UnhandledStateError> {
        if let Some(handler) = self.handlers.remove(state) {
            tracing::trace!(state, clause = "exact", "dispatching");
            return Ok(handler(payload));
        }

        if let Some(handler) = self.handlers.remove(CATCH_ALL) {
            tracing::trace!(state, clause = "catch_all", "dispatching");
            return Ok(handler(None));
        }

        Err(UnhandledStateError {
            state: state.to_string(),
        })
    }
}

impl<R> Default for Cases<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Cases<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Cases").field("clauses", &keys).finish()
    }
}
