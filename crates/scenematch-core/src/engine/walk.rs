use super::EqualityEngine;
use crate::accessor::{ComponentData, Leaf, MemberKind};
use crate::errors::MatchErrorKind;
use crate::matcher::{compare_ordered, compare_scrambled, MatchContext};
use crate::model::{Component, Node, Reference, Value};
use crate::report::{MatchReport, MatchTier, Subject};

/// One recursive descent through a pair of graphs
pub(crate) struct Walk<'r, 'a> {
    engine: &'r EqualityEngine,
    report: Option<&'r mut MatchReport<'a>>,
    depth: usize,
}

impl<'r, 'a> Walk<'r, 'a> {
    pub(crate) fn new(engine: &'r EqualityEngine, report: Option<&'r mut MatchReport<'a>>) -> Self {
        Self {
            engine,
            report,
            depth: 0,
        }
    }

    /// Compare two roots and leave the report holding the pairing that won
    pub(crate) fn node_tier(&mut self, a: &'a Node, b: &'a Node) -> MatchTier {
        let pairing = self.pair_nodes(a, b);
        if let Some(report) = self.report.as_deref_mut() {
            pairing.confirm(report);
        }
        pairing.tier
    }

    fn pair_nodes(&mut self, a: &'a Node, b: &'a Node) -> Pairing<'a> {
        let (subject_a, subject_b) = (Subject::Node(a), Subject::Node(b));
        if a.id() == b.id() {
            self.record_identity(subject_a);
            return Pairing::new(subject_a, subject_b, MatchTier::ReferenceEqual);
        }
        if !self.descend() {
            return Pairing::new(subject_a, subject_b, MatchTier::None);
        }

        // every accepted trial is a chosen pair, see compare_scrambled
        let keep = self.report.is_some();
        let mut below = Vec::new();
        let children = compare_scrambled(a.children(), b.children(), self, |x, y, walk| {
            let pairing = walk.pair_nodes(x, y);
            let tier = pairing.tier;
            if keep && walk.accepts(tier) {
                below.push(pairing);
            }
            tier
        });

        let mut structural = MatchTier::None;
        if children.matched || self.thorough() {
            let components_a = self.comparable_components(a);
            let components_b = self.comparable_components(b);
            let components = compare_scrambled(&components_a, &components_b, self, |x, y, walk| {
                let tier = walk.component_tier(*x, *y);
                if keep && walk.accepts(tier) {
                    below.push(Pairing::new(
                        Subject::Component(*x),
                        Subject::Component(*y),
                        tier,
                    ));
                }
                tier
            });
            if children.matched && components.matched {
                structural = children
                    .weakest
                    .min(components.weakest)
                    .min(MatchTier::ValueEqual);
            }
        }
        self.ascend();

        let tier = if structural.is_match() {
            structural
        } else if a.name() == b.name() {
            MatchTier::NamesEqual
        } else {
            MatchTier::None
        };
        self.settle(subject_a, subject_b, tier);
        Pairing {
            a: subject_a,
            b: subject_b,
            tier,
            below,
        }
    }

    pub(crate) fn component_tier(&mut self, a: &'a Component, b: &'a Component) -> MatchTier {
        if a.id() == b.id() {
            self.record_identity(Subject::Component(a));
            return MatchTier::ReferenceEqual;
        }
        if a.type_tag() != b.type_tag() {
            return MatchTier::None;
        }
        if !self.descend() {
            return MatchTier::None;
        }

        let equal = self.object_equals(a.data(), b.data());
        self.ascend();

        let tier = if equal {
            MatchTier::ValueEqual
        } else if a.data().name_fallback() && a.name() == b.name() {
            MatchTier::NamesEqual
        } else {
            MatchTier::None
        };

        // notes only survive on fallback matches
        if let Some(report) = self.report.as_deref_mut() {
            let key = (tier == MatchTier::NamesEqual).then_some(Subject::Component(a));
            report.push_notes(key);
        }
        self.settle(Subject::Component(a), Subject::Component(b), tier);
        tier
    }

    pub(crate) fn value_tier(&mut self, a: &Value, b: &Value) -> MatchTier {
        match (a, b) {
            (Value::Unavailable(fault), _) | (_, Value::Unavailable(fault)) => {
                if self.engine.options.verbose {
                    self.engine.logger.log(&format!(
                        "{} [{}]",
                        fault,
                        MatchErrorKind::AccessFault.code()
                    ));
                }
                MatchTier::None
            }
            (Value::Null, Value::Null) => MatchTier::Equal,
            (Value::Bool(x), Value::Bool(y)) => exact(x == y),
            (Value::Int(x), Value::Int(y)) => exact(x == y),
            (Value::Float(x), Value::Float(y)) => exact(self.floats_equal(*x, *y)),
            (Value::Text(x), Value::Text(y)) => exact(x == y),
            (Value::List(xs), Value::List(ys)) => self.list_tier(xs, ys),
            (Value::Object(x), Value::Object(y)) => self.object_tier(&**x, &**y),
            (Value::Reference(x), Value::Reference(y)) => self.reference_tier(x, y),
            _ => MatchTier::None,
        }
    }

    fn list_tier(&mut self, xs: &[Value], ys: &[Value]) -> MatchTier {
        if xs.len() != ys.len() {
            return MatchTier::None;
        }
        xs.iter()
            .zip(ys)
            .try_fold(MatchTier::Equal, |weakest, (x, y)| {
                let tier = self.value_tier(x, y);
                tier.is_match().then(|| weakest.min(tier))
            })
            .unwrap_or(MatchTier::None)
    }

    fn object_tier(&mut self, a: &dyn ComponentData, b: &dyn ComponentData) -> MatchTier {
        if a.type_tag() != b.type_tag() || !self.descend() {
            return MatchTier::None;
        }
        let equal = self.object_equals(a, b);
        self.ascend();
        exact(equal).min(MatchTier::ValueEqual)
    }

    /// References are compared, never followed
    fn reference_tier(&self, a: &Reference, b: &Reference) -> MatchTier {
        if a.target() == b.target() {
            return MatchTier::Equal;
        }
        if a.kind() != b.kind() {
            return MatchTier::None;
        }
        let confirmed = self.report.as_deref().is_some_and(|report| {
            report.pair_tier(&a.target(), &b.target()) >= MatchTier::ValueEqual
        });
        if confirmed || a.path() == b.path() {
            MatchTier::TargetEqual
        } else {
            MatchTier::None
        }
    }

    /// Fields and properties are compared independently; both must pass
    fn object_equals(&mut self, a: &dyn ComponentData, b: &dyn ComponentData) -> bool {
        let engine = self.engine;
        let policy = &engine.options.exclusions;

        let fields_equal = self.leaves_equal(
            &a.leaves(MemberKind::Field, policy),
            &b.leaves(MemberKind::Field, policy),
        );
        if !fields_equal && !self.thorough() {
            return false;
        }
        let properties_equal = self.leaves_equal(
            &a.leaves(MemberKind::Property, policy),
            &b.leaves(MemberKind::Property, policy),
        );
        fields_equal && properties_equal
    }

    fn leaves_equal(&mut self, a: &[Leaf], b: &[Leaf]) -> bool {
        let names: Vec<&str> = a.iter().map(|leaf| leaf.name).collect();
        compare_ordered(a, b, self, Some(names.as_slice()), |x, y, walk| {
            walk.value_tier(&x.value, &y.value).is_match()
        })
    }

    fn floats_equal(&self, a: f64, b: f64) -> bool {
        a == b || (a - b).abs() <= self.engine.options.float_tolerance
    }

    fn comparable_components(&self, node: &'a Node) -> Vec<&'a Component> {
        node.components()
            .iter()
            .filter(|c| !self.ignores(c))
            .collect()
    }

    fn ignores(&self, component: &Component) -> bool {
        self.report
            .as_deref()
            .is_some_and(|report| report.is_ignored(component.type_tag()))
    }

    /// Record a subject matched with itself, down to its last component
    fn record_identity(&mut self, subject: Subject<'a>) {
        let Some(report) = self.report.as_deref_mut() else {
            return;
        };
        match subject {
            Subject::Node(node) => {
                for descendant in node.descendants() {
                    report.add_match(descendant, descendant, MatchTier::ReferenceEqual);
                    for component in descendant.components() {
                        report.add_match(component, component, MatchTier::ReferenceEqual);
                    }
                }
            }
            Subject::Component(component) => {
                report.add_match(component, component, MatchTier::ReferenceEqual);
            }
        }
    }

    fn settle(&mut self, a: Subject<'a>, b: Subject<'a>, tier: MatchTier) {
        let options = &self.engine.options;
        if options.verbose && !options.accepts(tier) {
            self.engine
                .logger
                .log(&format!("{a} does not match {b} ({tier})"));
        }
        if tier.is_match() {
            if let Some(report) = self.report.as_deref_mut() {
                report.add_match(a, b, tier);
            }
        }
    }

    fn descend(&mut self) -> bool {
        let max_depth = self.engine.options.max_depth;
        if self.depth >= max_depth {
            self.engine.logger.warn(&format!(
                "comparison depth limit of {max_depth} reached, treating branch as unequal"
            ));
            return false;
        }
        self.depth += 1;
        true
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

impl MatchContext for Walk<'_, '_> {
    /// Thorough whenever someone is listening
    fn thorough(&self) -> bool {
        self.engine.options.verbose || self.report.is_some()
    }

    fn accepts(&self, tier: MatchTier) -> bool {
        self.engine.options.accepts(tier)
    }

    fn note(&mut self, note: String) {
        match self.report.as_deref_mut() {
            Some(report) => report.add_note(note),
            None => self.engine.logger.log(&note),
        }
    }
}

/// A decided pair together with the pairs chosen beneath it
///
/// Trials that lose a scrambled match can leave records behind that point
/// at the wrong counterpart, and replacing a weak match unwinds the
/// subtree of the abandoned partner. Confirming the winning pairing once
/// the comparison is over restores the records it implies.
struct Pairing<'a> {
    a: Subject<'a>,
    b: Subject<'a>,
    tier: MatchTier,
    below: Vec<Pairing<'a>>,
}

impl<'a> Pairing<'a> {
    fn new(a: Subject<'a>, b: Subject<'a>, tier: MatchTier) -> Self {
        Self {
            a,
            b,
            tier,
            below: Vec::new(),
        }
    }

    /// Parents before children
    fn confirm(&self, report: &mut MatchReport<'a>) {
        if self.tier.is_match() {
            report.confirm_match(self.a, self.b, self.tier);
        }
        for pairing in &self.below {
            pairing.confirm(report);
        }
    }
}

fn exact(equal: bool) -> MatchTier {
    if equal {
        MatchTier::Equal
    } else {
        MatchTier::None
    }
}
