//! Policy knobs shared by every instance of one machine.

/// How a transition into a field-less state treats extra positional values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SurplusArguments {
    /// Drop the values silently.
    #[default]
    Ignore,

    /// Fail the transition with `TransitionError::SurplusArguments`.
    Reject,
}

/// Machine-wide options.
///
/// The default reproduces the permissive behavior: surplus values are
/// ignored and a state may be named like the catch-all key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub surplus_arguments: SurplusArguments,

    /// Refuse a state literally named `_` so it cannot shadow the
    /// catch-all clause of `case_of`.
    pub reserve_catch_all: bool,
}

impl Options {
    /// Strict options: reject surplus values and reserve the catch-all name.
    pub fn strict() -> Self {
        Self {
            surplus_arguments: SurplusArguments::Reject,
            reserve_catch_all: true,
        }
    }
}
