//! Comparison options
//!
//! `CompareOptions` is a plain value held by the engine. It can be built in
//! code or loaded from JSON:
//!
//! ```
//! use scenematch_core::{CompareOptions, MatchTier};
//!
//! let options = CompareOptions::from_json(r#"{ "accept": "names_equal", "verbose": true }"#)?;
//! assert_eq!(options.accept, MatchTier::NamesEqual);
//! assert_eq!(options.max_depth, 256);
//! # Ok::<(), scenematch_core::MatchError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::accessor::ExclusionPolicy;
use crate::errors::{MatchError, Result};
use crate::report::MatchTier;

/// Depth at which the engine gives up on a branch
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareOptions {
    /// Scan past mismatches and log diagnostics even without a report
    pub verbose: bool,
    /// Weakest node/component tier counted as a match
    pub accept: MatchTier,
    /// Absolute tolerance for float leaf values
    pub float_tolerance: f64,
    /// Deepest level the engine descends to before giving up on a branch
    ///
    /// Recursion follows the hierarchy, so the cap keeps very deep graphs
    /// from exhausting the stack. The price is a false negative: a pair of
    /// otherwise equal trees deeper than `max_depth` levels (a graph and its
    /// own `duplicate()` included) compares as unequal, with a warning.
    /// Raise it for deep hierarchies and run on a thread with enough stack.
    pub max_depth: usize,
    /// Member classes left out of comparison
    pub exclusions: ExclusionPolicy,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl CompareOptions {
    /// Only structurally equal pairs match
    pub fn strict() -> Self {
        Self {
            verbose: false,
            accept: MatchTier::ValueEqual,
            float_tolerance: 0.0,
            max_depth: DEFAULT_MAX_DEPTH,
            exclusions: ExclusionPolicy::default(),
        }
    }

    /// Same-named pairs match even when their content differs
    pub fn lenient() -> Self {
        Self {
            accept: MatchTier::NamesEqual,
            ..Self::strict()
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_accept(mut self, accept: MatchTier) -> Self {
        self.accept = accept;
        self
    }

    pub fn with_float_tolerance(mut self, tolerance: f64) -> Self {
        self.float_tolerance = tolerance;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionPolicy) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn accepts(&self, tier: MatchTier) -> bool {
        tier.is_match() && tier >= self.accept
    }

    /// Check option values are in range
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidOptions` when `accept` is `none`, the
    /// float tolerance is negative or not finite, or `max_depth` is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.accept.is_match() {
            return Err(MatchError::InvalidOptions {
                reason: "accept must be names_equal or stronger".to_string(),
            });
        }
        if !self.float_tolerance.is_finite() || self.float_tolerance < 0.0 {
            return Err(MatchError::InvalidOptions {
                reason: format!(
                    "float_tolerance must be a finite non-negative number, got {}",
                    self.float_tolerance
                ),
            });
        }
        if self.max_depth == 0 {
            return Err(MatchError::InvalidOptions {
                reason: "max_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate options from JSON; missing keys take defaults
    ///
    /// # Errors
    ///
    /// Returns `MatchError::OptionsParse` for malformed JSON or unknown keys
    /// and `MatchError::InvalidOptions` when validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: CompareOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::MemberClass;
    use crate::errors::MatchErrorKind;

    #[test]
    fn test_default_is_strict() {
        let options = CompareOptions::default();
        assert_eq!(options, CompareOptions::strict());
        assert!(options.accepts(MatchTier::ValueEqual));
        assert!(!options.accepts(MatchTier::TargetEqual));
        assert!(!options.accepts(MatchTier::NamesEqual));
    }

    #[test]
    fn test_lenient_accepts_names() {
        let options = CompareOptions::lenient();
        assert!(options.accepts(MatchTier::NamesEqual));
        assert!(!options.accepts(MatchTier::None));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let options = CompareOptions::from_json(
            r#"{ "float_tolerance": 0.001, "exclusions": ["volatile"] }"#,
        )
        .unwrap();

        assert_eq!(options.accept, MatchTier::ValueEqual);
        assert_eq!(options.float_tolerance, 0.001);
        assert!(options.exclusions.excludes(MemberClass::Volatile));
        assert!(!options.exclusions.excludes(MemberClass::Derived));
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let err = CompareOptions::from_json(r#"{ "verbosity": 3 }"#).unwrap_err();
        assert_eq!(err.kind(), MatchErrorKind::OptionsParse);
    }

    #[test]
    fn test_validation_errors() {
        let cases = [
            CompareOptions::strict().with_accept(MatchTier::None),
            CompareOptions::strict().with_float_tolerance(-1.0),
            CompareOptions::strict().with_float_tolerance(f64::NAN),
            CompareOptions::strict().with_max_depth(0),
        ];
        for options in cases {
            let err = options.validate().unwrap_err();
            assert_eq!(err.code(), "ERR_INVALID_OPTIONS", "{options:?}");
        }
    }

    #[test]
    fn test_round_trip_through_json() {
        let options = CompareOptions::lenient().with_verbose(true);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(CompareOptions::from_json(&json).unwrap(), options);
    }
}
