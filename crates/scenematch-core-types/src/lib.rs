//! Core types shared across the scenematch crates
//!
//! This crate provides the identity primitives the comparison engine keys
//! its reports on, plus the canonical structured-logging vocabulary:
//!
//! - **Identity types**: ObjectId, TypeTag
//! - **Correlation types**: ComparisonId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod identity;
pub mod schema;

pub use correlation::ComparisonId;
pub use identity::{ObjectId, TypeTag};
