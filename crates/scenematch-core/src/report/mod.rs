//! Match report
//!
//! Accumulates pairwise match records, per-subject notes and the global
//! equality flag for one top-level comparison.

pub mod match_report;
pub mod subject;
pub mod tier;

pub use match_report::{MatchRecord, MatchReport};
pub use subject::{Identified, Subject};
pub use tier::MatchTier;
