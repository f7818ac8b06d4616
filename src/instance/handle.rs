//! Per-state operations generated from each declaration.

use super::{StateInstance, TransitionError};
use crate::core::{MethodKind, Payload, StateDescriptor};
use serde_json::Value;

/// The generated operations of one declared state, bound to an instance.
///
/// Obtained with `StateInstance::state` or through a `GeneratedMethod`.
#[derive(Clone, Copy, Debug)]
pub struct StateHandle<'a> {
    instance: &'a StateInstance,
    index: usize,
}

impl<'a> StateHandle<'a> {
    pub(crate) fn new(instance: &'a StateInstance, index: usize) -> Self {
        Self { instance, index }
    }

    pub fn descriptor(&self) -> &'a StateDescriptor {
        self.instance.descriptor_set().descriptor_at(self.index)
    }

    pub fn name(&self) -> &'a str {
        self.descriptor().name()
    }

    /// Whether the bound instance is currently in this state.
    pub fn is_current(&self) -> bool {
        self.instance.is(self.name())
    }

    /// `to<Name>()` for a field-less state.
    pub fn to(&self) -> Result<StateInstance, TransitionError> {
        self.to_with(Vec::<Value>::new())
    }

    /// `to<Name>(values...)`.
    pub fn to_with<I, V>(&self, values: I) -> Result<StateInstance, TransitionError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect();
        StateInstance::build(self.instance.descriptor_set(), self.index, values)
    }

    /// `when<Name>(callback)`.
    pub fn when<F, R>(&self, callback: F) -> Option<R>
    where
        F: FnOnce(Option<&Payload>) -> R,
    {
        self.instance.when(self.name(), callback)
    }
}

/// A generated operation resolved from its name.
#[derive(Clone, Copy, Debug)]
pub struct GeneratedMethod<'a> {
    kind: MethodKind,
    handle: StateHandle<'a>,
}

impl<'a> GeneratedMethod<'a> {
    pub(crate) fn new(kind: MethodKind, handle: StateHandle<'a>) -> Self {
        Self { kind, handle }
    }

    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    /// The state this operation was generated for.
    pub fn state(&self) -> StateHandle<'a> {
        self.handle
    }

    /// The generated name, e.g. `toB`.
    pub fn name(&self) -> String {
        match self.kind {
            MethodKind::Transition => self.handle.descriptor().transition_method(),
            MethodKind::When => self.handle.descriptor().when_method(),
        }
    }
}
