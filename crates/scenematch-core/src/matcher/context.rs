use crate::report::MatchTier;

/// Scan policy shared by the matchers
pub trait MatchContext {
    /// Keep scanning past the first mismatch to collect diagnostics
    fn thorough(&self) -> bool;

    /// Whether a pair of this tier counts as matched
    fn accepts(&self, tier: MatchTier) -> bool {
        tier >= MatchTier::ValueEqual
    }

    /// Receive a mismatch note (thorough mode only)
    fn note(&mut self, note: String);
}

/// Stops at the first mismatch and keeps no notes
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortCircuit;

impl MatchContext for ShortCircuit {
    fn thorough(&self) -> bool {
        false
    }

    fn note(&mut self, _note: String) {}
}

/// Scans everything and keeps every note
#[derive(Debug, Clone, Default)]
pub struct Collect {
    notes: Vec<String>,
}

impl Collect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn into_notes(self) -> Vec<String> {
        self.notes
    }
}

impl MatchContext for Collect {
    fn thorough(&self) -> bool {
        true
    }

    fn note(&mut self, note: String) {
        self.notes.push(note);
    }
}
