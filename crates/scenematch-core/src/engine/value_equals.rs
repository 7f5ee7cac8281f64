use super::EqualityEngine;
use crate::model::{Component, Node};
use crate::report::MatchReport;

/// Deep structural equality with an optional report
///
/// Uses the default (strict) [`EqualityEngine`]. Build an engine directly
/// for other options.
///
/// ```
/// use scenematch_core::{MatchReport, Node, ValueEquals};
///
/// let a = Node::new("Door").with_child(Node::new("Hinge"));
/// let b = a.duplicate();
///
/// let mut report = MatchReport::new();
/// assert!(a.value_equals(&b, Some(&mut report)));
/// assert!(report.is_equal());
/// assert!(report.matched(&a.children()[0]));
/// ```
pub trait ValueEquals {
    fn value_equals<'a>(&'a self, other: &'a Self, report: Option<&mut MatchReport<'a>>) -> bool;
}

impl ValueEquals for Node {
    fn value_equals<'a>(&'a self, other: &'a Self, report: Option<&mut MatchReport<'a>>) -> bool {
        EqualityEngine::default().nodes_equal(self, other, report)
    }
}

impl ValueEquals for Component {
    fn value_equals<'a>(&'a self, other: &'a Self, report: Option<&mut MatchReport<'a>>) -> bool {
        EqualityEngine::default().components_equal(self, other, report)
    }
}
