//! Macros for ergonomic state declaration.

/// Declare possible states inline and return the initial instance.
///
/// Expands to `possible_states(...)`, so it returns a
/// `Result<StateInstance, ConfigurationError>`.
///
/// # Example
///
/// ```
/// use possible_states::possible_states;
///
/// let request = possible_states!["idle", "loading", "loaded<body>"].unwrap();
///
/// assert_eq!(request.current(), "idle");
/// ```
#[macro_export]
macro_rules! possible_states {
    ($($declaration:expr),* $(,)?) => {{
        let declarations: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::ToString::to_string(&$declaration)),*];
        $crate::builder::possible_states(declarations)
    }};
}
