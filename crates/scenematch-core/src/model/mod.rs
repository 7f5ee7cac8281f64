//! Compared object graph
//!
//! A [`Node`] owns its children and its attached [`Component`]s. Components
//! carry a type-erased payload whose leaf values are read as [`Value`]s.

pub mod component;
pub mod node;
pub mod value;

pub use component::Component;
pub use node::{Descendants, Node};
pub use value::{Reference, ReferenceKind, Value};
