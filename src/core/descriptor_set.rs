//! The ordered, immutable table of declared states.

use super::descriptor::StateDescriptor;
use crate::builder::error::ConfigurationError;
use crate::builder::options::Options;
use crate::dispatch::CATCH_ALL;
use std::collections::HashMap;

/// Kind of a generated per-state operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// `to<Name>`: unconditional transition into the state.
    Transition,
    /// `when<Name>`: callback run only while in the state.
    When,
}

/// Every state declared by one factory call.
///
/// Built once and shared by every instance derived from that call. The
/// first descriptor is the initial state and never declares fields.
#[derive(Debug)]
pub struct DescriptorSet {
    descriptors: Vec<StateDescriptor>,
    by_name: HashMap<String, usize>,
    methods: HashMap<String, (MethodKind, usize)>,
    options: Options,
}

impl DescriptorSet {
    /// Parse a list of declarations.
    ///
    /// Two different names that derive the same generated operation
    /// (`x` and `X` both give `toX`) are rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use possible_states::builder::Options;
    /// use possible_states::core::DescriptorSet;
    ///
    /// let set = DescriptorSet::parse(["a", "b<first, second>"], Options::default()).unwrap();
    ///
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.initial().name(), "a");
    /// assert_eq!(set.find("b").unwrap().fields(), ["first", "second"]);
    /// ```
    pub fn parse<I, S>(declarations: I, options: Options) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let descriptors = declarations
            .into_iter()
            .map(|declaration| StateDescriptor::parse(declaration.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let initial = descriptors.first().ok_or(ConfigurationError::NoStates)?;
        if initial.has_fields() {
            return Err(ConfigurationError::InitialStateCarriesData {
                state: initial.name().to_string(),
            });
        }

        if options.reserve_catch_all {
            if let Some(reserved) = descriptors.iter().find(|d| d.name() == CATCH_ALL) {
                return Err(ConfigurationError::ReservedStateName {
                    state: reserved.name().to_string(),
                });
            }
        }

        let mut by_name: HashMap<String, usize> = HashMap::with_capacity(descriptors.len());
        let mut methods: HashMap<String, (MethodKind, usize)> =
            HashMap::with_capacity(descriptors.len() * 2);
        for (index, descriptor) in descriptors.iter().enumerate() {
            // a repeated name keeps its first declaration
            if by_name.contains_key(descriptor.name()) {
                continue;
            }

            let generated = [
                (descriptor.transition_method(), MethodKind::Transition),
                (descriptor.when_method(), MethodKind::When),
            ];
            for (method, kind) in generated {
                if let Some(&(_, taken)) = methods.get(&method) {
                    let first: &StateDescriptor = &descriptors[taken];
                    return Err(ConfigurationError::GeneratedNameCollision {
                        method,
                        first: first.name().to_string(),
                        second: descriptor.name().to_string(),
                    });
                }
                methods.insert(method, (kind, index));
            }
            by_name.insert(descriptor.name().to_string(), index);
        }

        tracing::debug!(
            states = descriptors.len(),
            initial = %initial.name(),
            "parsed state declarations"
        );

        Ok(Self {
            descriptors,
            by_name,
            methods,
            options,
        })
    }

    /// The default state every factory call starts in.
    pub fn initial(&self) -> &StateDescriptor {
        &self.descriptors[0]
    }

    /// Look up a descriptor by state name. The first declaration wins.
    pub fn find(&self, name: &str) -> Option<&StateDescriptor> {
        self.position(name).map(|index| &self.descriptors[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Always `false`: a set holds at least the initial state.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub(crate) fn descriptor_at(&self, index: usize) -> &StateDescriptor {
        &self.descriptors[index]
    }

    pub(crate) fn method_entry(&self, method: &str) -> Option<(MethodKind, usize)> {
        self.methods.get(method).copied()
    }
}
