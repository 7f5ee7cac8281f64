//! Sequence matchers
//!
//! [`compare_ordered`] walks two position-aligned sequences, and
//! [`compare_scrambled`] pairs up two unordered collections greedily. Both
//! take a [`MatchContext`] that decides how thorough the scan is, which
//! tiers count as a match, and where mismatch notes go. The item callbacks
//! receive the context back so they can recurse through it.

pub mod context;
pub mod ordered;
pub mod scrambled;

pub use context::{Collect, MatchContext, ShortCircuit};
pub use ordered::compare_ordered;
pub use scrambled::{compare_scrambled, ScrambledOutcome};
