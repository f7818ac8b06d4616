//! State declarations and their parsed descriptors.
//!
//! A declaration is either a bare state name (`idle`) or a name followed by
//! a comma separated field list in angle brackets (`loaded<body, status>`).

use crate::builder::error::ConfigurationError;
use serde::Serialize;
use std::fmt;

/// Parsed form of a single state declaration.
///
/// # Example
///
/// ```rust
/// use possible_states::core::StateDescriptor;
///
/// let descriptor = StateDescriptor::parse("loaded<body, status>").unwrap();
///
/// assert_eq!(descriptor.name(), "loaded");
/// assert_eq!(descriptor.fields(), ["body", "status"]);
/// assert_eq!(descriptor.transition_method(), "toLoaded");
/// assert_eq!(descriptor.to_string(), "loaded<body, status>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StateDescriptor {
    name: String,
    fields: Vec<String>,
}

impl StateDescriptor {
    /// Parse one declaration.
    ///
    /// Field names are trimmed and kept in declaration order. Duplicates
    /// are left as declared.
    pub fn parse(declaration: &str) -> Result<Self, ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidDeclaration {
            declaration: declaration.to_string(),
            reason: reason.to_string(),
        };

        let (name, fields) = match declaration.split_once('<') {
            None => (declaration.trim(), Vec::new()),
            Some((name, rest)) => {
                let rest = rest.trim_end();
                let close = rest
                    .find('>')
                    .ok_or_else(|| invalid("missing closing '>'"))?;
                if close + 1 != rest.len() {
                    return Err(invalid("unexpected text after '>'"));
                }

                let fields = rest[..close]
                    .split(',')
                    .map(str::trim)
                    .map(|field| {
                        if field.is_empty() {
                            Err(invalid("empty field name"))
                        } else if !is_identifier(field) {
                            Err(invalid("field name is not an identifier"))
                        } else {
                            Ok(field.to_string())
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                (name.trim(), fields)
            }
        };

        if name.is_empty() {
            return Err(invalid("empty state name"));
        }
        if !is_identifier(name) {
            return Err(invalid("state name is not an identifier"));
        }

        Ok(Self {
            name: name.to_string(),
            fields,
        })
    }

    /// The declared state name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared payload fields, in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of positional values a transition into this state requires.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Capitalized name used to derive generated operation names.
    ///
    /// Only the first character changes: `loading` becomes `Loading` and
    /// `b` becomes `B`.
    pub fn suffix(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Name of the generated transition operation (`to<Name>`).
    pub fn transition_method(&self) -> String {
        format!("to{}", self.suffix())
    }

    /// Name of the generated conditional operation (`when<Name>`).
    pub fn when_method(&self) -> String {
        format!("when{}", self.suffix())
    }
}

impl fmt::Display for StateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.has_fields() {
            write!(f, "<{}>", self.fields.join(", "))?;
        }
        Ok(())
    }
}

/// Identifier-like token: a letter or `_` followed by letters, digits or `_`.
pub(crate) fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
