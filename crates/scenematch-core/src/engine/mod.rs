//! Equality engine
//!
//! Recursive comparator over nodes, components and leaf values. Children
//! and components are paired with [`compare_scrambled`], member values are
//! walked with [`compare_ordered`], and every decided node or component
//! pair is written to the attached [`MatchReport`].
//!
//! The engine always produces a [`MatchTier`]; `CompareOptions::accept`
//! turns it into the boolean answer. When a top-level comparison is not
//! accepted, both roots are handed to [`MatchReport::add_non_match`], which
//! fails the report and files every subject still lacking a record.
//!
//! [`compare_scrambled`]: crate::matcher::compare_scrambled
//! [`compare_ordered`]: crate::matcher::compare_ordered

mod value_equals;
mod walk;

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::logging_facility::{Logger, TracingLogger};
use crate::model::{Component, Node, Value};
use crate::options::CompareOptions;
use crate::report::{MatchReport, MatchTier, Subject};
use crate::{log_op_end, log_op_start};

pub use value_equals::ValueEquals;
use walk::Walk;

/// Structural comparator configured by [`CompareOptions`]
pub struct EqualityEngine {
    options: CompareOptions,
    logger: Arc<dyn Logger>,
}

impl Default for EqualityEngine {
    fn default() -> Self {
        Self::new(CompareOptions::default())
    }
}

impl fmt::Debug for EqualityEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EqualityEngine")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl EqualityEngine {
    pub fn new(options: CompareOptions) -> Self {
        Self {
            options,
            logger: Arc::new(TracingLogger),
        }
    }

    /// Send diagnostics somewhere other than `tracing`
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Classify how well two hierarchies correspond
    pub fn compare_nodes<'a>(
        &self,
        a: &'a Node,
        b: &'a Node,
        report: Option<&mut MatchReport<'a>>,
    ) -> MatchTier {
        self.run("compare_nodes", a.into(), b.into(), report, |walk| {
            walk.node_tier(a, b)
        })
    }

    pub fn nodes_equal<'a>(
        &self,
        a: &'a Node,
        b: &'a Node,
        report: Option<&mut MatchReport<'a>>,
    ) -> bool {
        self.options.accepts(self.compare_nodes(a, b, report))
    }

    /// Classify two components; different types never match
    pub fn compare_components<'a>(
        &self,
        a: &'a Component,
        b: &'a Component,
        report: Option<&mut MatchReport<'a>>,
    ) -> MatchTier {
        self.run("compare_components", a.into(), b.into(), report, |walk| {
            walk.component_tier(a, b)
        })
    }

    pub fn components_equal<'a>(
        &self,
        a: &'a Component,
        b: &'a Component,
        report: Option<&mut MatchReport<'a>>,
    ) -> bool {
        self.options.accepts(self.compare_components(a, b, report))
    }

    /// Classify two leaf values
    ///
    /// Leaf comparison is exact: any tier above `None` is equal, whatever
    /// the accept threshold. Mismatch notes stay pending on the report.
    pub fn compare_values(
        &self,
        a: &Value,
        b: &Value,
        report: Option<&mut MatchReport<'_>>,
    ) -> MatchTier {
        let start = Instant::now();
        log_op_start!("compare_values", kind = a.kind_name());

        let mut report = report;
        let tier = Walk::new(self, report.as_deref_mut()).value_tier(a, b);
        if !tier.is_match() {
            if let Some(report) = report {
                report.mark_unequal();
            }
        }

        log_op_end!(
            "compare_values",
            duration_ms = start.elapsed().as_millis() as u64,
            tier = %tier
        );
        tier
    }

    pub fn values_equal(&self, a: &Value, b: &Value, report: Option<&mut MatchReport<'_>>) -> bool {
        self.compare_values(a, b, report).is_match()
    }

    fn run<'a, F>(
        &self,
        op: &'static str,
        a: Subject<'a>,
        b: Subject<'a>,
        mut report: Option<&mut MatchReport<'a>>,
        compare: F,
    ) -> MatchTier
    where
        F: FnOnce(&mut Walk<'_, 'a>) -> MatchTier,
    {
        let comparison_id = report
            .as_deref()
            .map(|r| r.comparison_id().to_string())
            .unwrap_or_default();
        log_op_start!(
            op,
            subject = %a,
            counterpart = %b,
            comparison_id = %comparison_id
        );
        let start = Instant::now();

        let tier = compare(&mut Walk::new(self, report.as_deref_mut()));
        let equal = self.options.accepts(tier);

        match report {
            Some(report) => {
                if !equal {
                    report.add_non_match(a);
                    report.add_non_match(b);
                }
                log_op_end!(
                    op,
                    duration_ms = start.elapsed().as_millis() as u64,
                    comparison_id = %comparison_id,
                    tier = %tier,
                    equal = equal,
                    good_len = report.good_matches().len(),
                    bad_len = report.bad_matches().len()
                );
            }
            None => {
                log_op_end!(
                    op,
                    duration_ms = start.elapsed().as_millis() as u64,
                    tier = %tier,
                    equal = equal
                );
            }
        }
        tier
    }
}
