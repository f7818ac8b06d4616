//! Possible States: immutable finite-state-machine values
//!
//! Declare the states a value can be in, optionally with named data fields,
//! and get back an immutable instance sitting in the first state. Every
//! transition produces a new instance; none ever mutates.
//!
//! # Core Concepts
//!
//! - **Declaration**: `"name"` or `"name<field1, field2>"`, parsed into a
//!   `StateDescriptor`
//! - **Instance**: `StateInstance`, the current state plus its `Payload`
//! - **Generated operations**: `to<Name>` / `when<Name>` for every declared
//!   state, reachable by state name or by generated name
//! - **Dispatch**: `case_of` with a `Cases` table and a catch-all clause
//!
//! # Example
//!
//! ```rust
//! use possible_states::{possible_states, Cases, Error};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Error> {
//!     let request = possible_states([
//!         "idle",
//!         "loading",
//!         "loaded<body, status>",
//!         "failed<reason>",
//!     ])?;
//!     assert_eq!(request.current(), "idle");
//!
//!     let loaded = request
//!         .to("loading")?
//!         .to_with("loaded", [json!("hello"), json!(200)])?;
//!     assert_eq!(loaded.data().unwrap(), &json!({ "body": "hello", "status": 200 }));
//!
//!     let status = loaded.case_of(
//!         Cases::new()
//!             .on("loaded", |data| data.and_then(|d| d.get("status")).cloned())
//!             .otherwise(|| None),
//!     )?;
//!     assert_eq!(status, Some(json!(200)));
//!
//!     // the source instance is untouched
//!     assert_eq!(request.current(), "idle");
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod instance;

// Re-export commonly used types
pub use crate::builder::{
    possible_states, ConfigurationError, Options, PossibleStatesBuilder, SurplusArguments,
};
pub use crate::core::{DescriptorSet, MethodKind, Payload, StateDescriptor};
pub use crate::dispatch::{Cases, UnhandledStateError, CATCH_ALL};
pub use crate::error::Error;
pub use crate::instance::{GeneratedMethod, StateHandle, StateInstance, TransitionError};
