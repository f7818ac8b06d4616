//! Declared states and the data they carry.
//!
//! This module contains the pure parsing core:
//! - `StateDescriptor` for a single parsed declaration
//! - `DescriptorSet` for the immutable table shared by every instance
//! - `Payload` for the named values a state holds
//!
//! Nothing here mutates after construction.

mod descriptor;
mod descriptor_set;
mod payload;

pub use descriptor::StateDescriptor;
pub use descriptor_set::{DescriptorSet, MethodKind};
pub use payload::Payload;
