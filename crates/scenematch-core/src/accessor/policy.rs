use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Why a member exists, which decides whether it is worth comparing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberClass {
    /// Authored state; always compared
    Stored,
    /// Recomputed from other state (bounds, cached matrices)
    Derived,
    /// Handle to an asset shared between objects (mesh, material)
    SharedResource,
    /// Object identity or hierarchy links (name, owner, flags)
    Identity,
    /// Runtime state that changes without authoring (visibility, physics)
    Volatile,
}

/// Static set of member classes excluded from comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionPolicy {
    excluded: BTreeSet<MemberClass>,
}

impl Default for ExclusionPolicy {
    /// Compares stored state only
    fn default() -> Self {
        Self {
            excluded: [
                MemberClass::Derived,
                MemberClass::SharedResource,
                MemberClass::Identity,
                MemberClass::Volatile,
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl ExclusionPolicy {
    /// Policy that excludes nothing
    pub fn compare_all() -> Self {
        Self {
            excluded: BTreeSet::new(),
        }
    }

    pub fn with_excluded(mut self, class: MemberClass) -> Self {
        self.excluded.insert(class);
        self
    }

    pub fn with_included(mut self, class: MemberClass) -> Self {
        self.excluded.remove(&class);
        self
    }

    pub fn excludes(&self, class: MemberClass) -> bool {
        self.excluded.contains(&class)
    }

    pub fn excluded(&self) -> impl Iterator<Item = MemberClass> + '_ {
        self.excluded.iter().copied()
    }
}
