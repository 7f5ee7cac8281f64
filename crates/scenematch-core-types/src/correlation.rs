//! Correlation types for tracing a single comparison
//!
//! Every match report carries a `ComparisonId` so that all log events
//! emitted while one report is being populated can be grouped together.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one top-level comparison
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComparisonId(String);

impl ComparisonId {
    /// Generate a new ComparisonId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for ComparisonId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ComparisonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
