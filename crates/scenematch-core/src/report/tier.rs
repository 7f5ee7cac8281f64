use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength of evidence that two objects correspond
///
/// Ordered low to high; the report never replaces a record with a weaker one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    #[default]
    None,
    /// Same name (and, for components, same type) but different content
    NamesEqual,
    /// References to distinct objects that correspond
    TargetEqual,
    /// Structurally equal
    ValueEqual,
    /// Natively equal leaf values
    Equal,
    /// The same object
    ReferenceEqual,
}

impl MatchTier {
    pub fn is_match(self) -> bool {
        self != MatchTier::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::None => "none",
            MatchTier::NamesEqual => "names_equal",
            MatchTier::TargetEqual => "target_equal",
            MatchTier::ValueEqual => "value_equal",
            MatchTier::Equal => "equal",
            MatchTier::ReferenceEqual => "reference_equal",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
