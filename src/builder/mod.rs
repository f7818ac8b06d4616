//! Factory API for declaring a set of possible states.
//!
//! `possible_states` covers the common case; `PossibleStatesBuilder` adds
//! machine-wide `Options`.

pub mod error;
pub mod macros;
pub mod options;

pub use error::ConfigurationError;
pub use options::{Options, SurplusArguments};

use crate::core::DescriptorSet;
use crate::instance::StateInstance;
use std::sync::Arc;

/// Declare the possible states and return the initial instance.
///
/// The first declaration is the initial state and must not declare fields.
///
/// # Example
///
/// ```
/// use possible_states::builder::possible_states;
///
/// let ui = possible_states(["a", "b", "c"]).unwrap();
/// assert_eq!(ui.current(), "a");
///
/// let ui = ui.to("b").unwrap();
/// assert_eq!(ui.current(), "b");
/// ```
pub fn possible_states<I, S>(declarations: I) -> Result<StateInstance, ConfigurationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PossibleStatesBuilder::new().states(declarations).build()
}

/// Builder for a set of possible states with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct PossibleStatesBuilder {
    declarations: Vec<String>,
    options: Options,
}

impl PossibleStatesBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one state declaration.
    pub fn state(mut self, declaration: impl AsRef<str>) -> Self {
        self.declarations.push(declaration.as_ref().to_string());
        self
    }

    /// Add several declarations at once, in order.
    pub fn states<I, S>(mut self, declarations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.declarations
            .extend(declarations.into_iter().map(|d| d.as_ref().to_string()));
        self
    }

    /// Replace all options.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set the policy for extra values passed to field-less states.
    pub fn surplus_arguments(mut self, policy: SurplusArguments) -> Self {
        self.options.surplus_arguments = policy;
        self
    }

    /// Refuse a state named like the catch-all key.
    pub fn reserve_catch_all(mut self, reserve: bool) -> Self {
        self.options.reserve_catch_all = reserve;
        self
    }

    /// Parse the declarations and return the initial instance.
    pub fn build(self) -> Result<StateInstance, ConfigurationError> {
        let descriptors = DescriptorSet::parse(&self.declarations, self.options)?;
        Ok(StateInstance::initial(Arc::new(descriptors)))
    }
}
