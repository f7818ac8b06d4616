//! Immutable state values and their generated operations.
//!
//! A `StateInstance` records which declared state is current and the payload
//! that state holds. Every transition returns a new instance sharing the same
//! `DescriptorSet`; the source instance is only read.

mod error;
mod handle;

pub use error::TransitionError;
pub use handle::{GeneratedMethod, StateHandle};

use crate::builder::options::SurplusArguments;
use crate::core::{DescriptorSet, Payload, StateDescriptor};
use crate::dispatch::{Cases, UnhandledStateError};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// "Currently in state X, with optional payload".
///
/// Instances are cheap to clone and safe to share between threads.
///
/// # Example
///
/// ```rust
/// use possible_states::possible_states;
/// use serde_json::json;
///
/// let ui = possible_states(["a", "b<first, second>"]).unwrap();
/// let next = ui.to_with("b", ["foo", "bar"]).unwrap();
///
/// assert_eq!(ui.current(), "a");
/// assert_eq!(next.current(), "b");
/// assert_eq!(next.data().unwrap(), &json!({ "first": "foo", "second": "bar" }));
/// ```
#[derive(Clone, Debug)]
pub struct StateInstance {
    descriptors: Arc<DescriptorSet>,
    current: usize,
    payload: Option<Payload>,
}

impl StateInstance {
    /// Instance in the initial state, without payload.
    pub(crate) fn initial(descriptors: Arc<DescriptorSet>) -> Self {
        Self {
            descriptors,
            current: 0,
            payload: None,
        }
    }

    /// Build an instance in the state at `index` from positional values.
    pub(crate) fn build(
        descriptors: &Arc<DescriptorSet>,
        index: usize,
        values: Vec<Value>,
    ) -> Result<Self, TransitionError> {
        let descriptor = descriptors.descriptor_at(index);
        let found = values.len();

        let payload = if descriptor.has_fields() {
            if found != descriptor.arity() {
                return Err(TransitionError::Arity {
                    state: descriptor.name().to_string(),
                    expected: descriptor.arity(),
                    found,
                });
            }
            Some(Payload::from_fields(descriptor.fields(), values))
        } else {
            if found > 0 && descriptors.options().surplus_arguments == SurplusArguments::Reject {
                return Err(TransitionError::SurplusArguments {
                    state: descriptor.name().to_string(),
                    found,
                });
            }
            None
        };

        tracing::trace!(state = %descriptor.name(), values = found, "transitioned");

        Ok(Self {
            descriptors: Arc::clone(descriptors),
            current: index,
            payload,
        })
    }

    /// Name of the current state.
    pub fn current(&self) -> &str {
        self.descriptor().name()
    }

    /// Payload of the current state, `None` when it declares no fields.
    pub fn data(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Whether the current state is named `state`.
    pub fn is(&self, state: &str) -> bool {
        self.current() == state
    }

    /// Descriptor of the current state.
    pub fn descriptor(&self) -> &StateDescriptor {
        self.descriptors.descriptor_at(self.current)
    }

    /// Every state declared alongside this one.
    pub fn descriptors(&self) -> &DescriptorSet {
        &self.descriptors
    }

    /// Declared state names, in order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(StateDescriptor::name)
    }

    /// Whether both instances descend from the same factory call.
    pub fn same_machine(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.descriptors, &other.descriptors)
    }

    /// Move to a field-less state.
    ///
    /// Moving to a state that declares fields fails with
    /// `TransitionError::Arity`; use `to_with` instead.
    pub fn to(&self, state: &str) -> Result<Self, TransitionError> {
        self.to_with(state, Vec::<Value>::new())
    }

    /// Move to `state`, assigning `values` to its declared fields in order.
    ///
    /// Callable from any state. Values must match the declared field count
    /// when the target declares fields.
    pub fn to_with<I, V>(&self, state: &str, values: I) -> Result<Self, TransitionError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let handle = self
            .state(state)
            .ok_or_else(|| TransitionError::UnknownState {
                state: state.to_string(),
            })?;
        handle.to_with(values)
    }

    /// Run `callback` with the payload iff the current state is `state`.
    ///
    /// Returns `Some(result)` when the callback ran and `None` when it was
    /// skipped. A name that was never declared is never current, so a
    /// misspelled state also yields `None`; check it with `state(name)` or
    /// `descriptors().contains(name)` when that matters.
    pub fn when<F, R>(&self, state: &str, callback: F) -> Option<R>
    where
        F: FnOnce(Option<&Payload>) -> R,
    {
        if !self.descriptors.contains(state) {
            tracing::debug!(state, "when() called with an undeclared state");
        }
        if self.is(state) {
            Some(callback(self.data()))
        } else {
            None
        }
    }

    /// The generated operations of a declared state.
    pub fn state(&self, name: &str) -> Option<StateHandle<'_>> {
        self.descriptors
            .position(name)
            .map(|index| StateHandle::new(self, index))
    }

    /// Resolve a generated operation by name, e.g. `toB` or `whenB`.
    pub fn method(&self, name: &str) -> Option<GeneratedMethod<'_>> {
        self.descriptors
            .method_entry(name)
            .map(|(kind, index)| GeneratedMethod::new(kind, StateHandle::new(self, index)))
    }

    /// Names of every generated operation, in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = String> + '_ {
        self.descriptors
            .iter()
            .enumerate()
            .filter(|(index, d)| self.descriptors.position(d.name()) == Some(*index))
            .flat_map(|(_, d)| [d.transition_method(), d.when_method()])
    }

    /// Dispatch on the current state.
    ///
    /// Runs the handler registered for the current state with its payload,
    /// else the catch-all handler, else fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use possible_states::{possible_states, Cases};
    ///
    /// let ui = possible_states(["a", "b", "c"]).unwrap();
    ///
    /// let label = ui
    ///     .case_of(Cases::new().on("c", |_| "c").otherwise(|| "catch all"))
    ///     .unwrap();
    ///
    /// assert_eq!(label, "catch all");
    /// ```
    pub fn case_of<R>(&self, cases: Cases<'_, R>) -> Result<R, UnhandledStateError> {
        cases.dispatch(self.current(), self.data())
    }

    pub(crate) fn descriptor_set(&self) -> &Arc<DescriptorSet> {
        &self.descriptors
    }
}

impl PartialEq for StateInstance {
    fn eq(&self, other: &Self) -> bool {
        self.same_machine(other) && self.current == other.current && self.payload == other.payload
    }
}

impl fmt::Display for StateInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.current())?;
        if let Some(payload) = &self.payload {
            write!(f, "{}", payload.to_json())?;
        }
        Ok(())
    }
}
