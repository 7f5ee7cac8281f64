//! scenematch core - deep structural equality for object hierarchies
//!
//! This crate compares two trees of nodes, each node carrying an unordered
//! set of typed components, and explains how they correspond:
//! - Node / Component / Value data model with identity and cross references
//! - Compile-time registered member schemas with typed exclusions
//! - Ordered and scrambled (greedy, order-independent) sequence matching
//! - A recursive equality engine producing tiered match classifications
//! - A match report with symmetric records, mismatch notes and cascading
//!   non-match status
//!
//! # Example
//!
//! ```
//! use std::sync::OnceLock;
//! use scenematch_core::{Comparable, MatchReport, Node, Schema, ValueEquals};
//!
//! #[derive(Debug, Clone)]
//! struct Motor {
//!     speed: f64,
//! }
//!
//! impl Comparable for Motor {
//!     fn schema() -> &'static Schema<Self> {
//!         static SCHEMA: OnceLock<Schema<Motor>> = OnceLock::new();
//!         SCHEMA.get_or_init(|| {
//!             Schema::builder("Motor")
//!                 .field("speed", |m: &Motor| m.speed.into())
//!                 .build()
//!         })
//!     }
//! }
//!
//! let a = Node::new("Cart").with_component(Motor { speed: 1.0 });
//! let b = Node::new("Cart").with_component(Motor { speed: 2.0 });
//!
//! let mut report = MatchReport::new();
//! assert!(!a.value_equals(&b, Some(&mut report)));
//! assert_eq!(report.notes(&a.components()[0]), ["speed: 1 != 2"]);
//! ```

pub mod accessor;
pub mod engine;
pub mod errors;
pub mod logging_facility;
pub mod matcher;
pub mod model;
pub mod options;
pub mod report;

// Re-export commonly used types
pub use accessor::{Comparable, ComponentData, ExclusionPolicy, MemberClass, MemberKind, Schema};
pub use engine::{EqualityEngine, ValueEquals};
pub use errors::{AccessFault, MatchError, MatchErrorKind, Result};
pub use matcher::{compare_ordered, compare_scrambled, MatchContext, ScrambledOutcome};
pub use model::{Component, Node, Reference, ReferenceKind, Value};
pub use options::CompareOptions;
pub use report::{Identified, MatchRecord, MatchReport, MatchTier, Subject};
pub use scenematch_core_types::{ComparisonId, ObjectId, TypeTag};
