//! Leaf value access: exclusions, access faults, references
//!
//! ## Scenarios Covered
//!
//! 1. Member classes excluded by policy do not affect equality
//! 2. Unreadable members make a pair unequal and are logged in verbose mode
//! 3. References compare by identity, by path, or by confirmed counterpart
//! 4. Nested component-shaped values compare structurally

mod common;

use common::{motor, Link, Motor, Recorder, Renderer, Sensor};
use scenematch_core::accessor::{Comparable, Schema};
use scenematch_core::{
    CompareOptions, EqualityEngine, ExclusionPolicy, MatchReport, MatchTier, MemberClass, Node,
    Value,
};
use std::sync::{Arc, OnceLock};

fn renderer(bounds: f64, visible: bool) -> Renderer {
    Renderer {
        color: "red".to_string(),
        bounds,
        visible,
    }
}

#[test]
fn test_derived_and_volatile_members_are_excluded_by_default() {
    // GIVEN renderers that differ only in derived and volatile state
    let a = Node::new("Mesh").with_component(renderer(1.0, true));
    let b = Node::new("Mesh").with_component(renderer(4.0, false));

    // THEN the default policy treats them as equal
    assert!(EqualityEngine::default().nodes_equal(&a, &b, None));

    // AND comparing every member class tells them apart
    let everything = EqualityEngine::new(
        CompareOptions::strict().with_exclusions(ExclusionPolicy::compare_all()),
    );
    assert!(!everything.nodes_equal(&a, &b, None));

    // AND re-including one class is enough
    let with_derived = EqualityEngine::new(CompareOptions::strict().with_exclusions(
        ExclusionPolicy::default().with_included(MemberClass::Derived),
    ));
    assert!(!with_derived.nodes_equal(&a, &b, None));
}

#[test]
fn test_unreadable_member_is_unequal_and_logged() {
    // GIVEN two sensors that were never sampled
    let a = Node::new("Probe").with_component(Sensor { reading: None });
    let b = Node::new("Probe").with_component(Sensor { reading: None });
    let recorder = Arc::new(Recorder::default());
    let engine = EqualityEngine::new(CompareOptions::strict().with_verbose(true))
        .with_logger(recorder.clone());

    // THEN they never compare equal, not even as values
    let tier = engine.compare_components(&a.components()[0], &b.components()[0], None);
    assert_eq!(tier, MatchTier::NamesEqual);

    // AND the fault was logged with its stable code
    assert!(recorder.contains("cannot read member `reading`: sensor not sampled"));
    assert!(recorder.contains("ERR_ACCESS_FAULT"));

    // AND sampled sensors are fine
    let c = Node::new("Probe").with_component(Sensor { reading: Some(0.5) });
    let d = Node::new("Probe").with_component(Sensor { reading: Some(0.5) });
    assert!(engine.nodes_equal(&c, &d, None));
}

#[test]
fn test_unreadable_member_is_not_logged_quietly() {
    let a = Node::new("Probe").with_component(Sensor { reading: None });
    let b = Node::new("Probe").with_component(Sensor { reading: None });
    let recorder = Arc::new(Recorder::default());
    let engine = EqualityEngine::default().with_logger(recorder.clone());

    assert!(!engine.nodes_equal(&a, &b, None));
    assert!(recorder.lines().is_empty());
}

fn rig(hand_name: &str) -> Node {
    let mut root = Node::new("Rig").with_child(Node::new(hand_name).with_component(motor(1.0)));
    let target = root.reference_to(hand_name);
    root.add_component(Link { target });
    root
}

#[test]
fn test_references_to_corresponding_paths_are_equal() {
    let a = rig("Hand");
    let b = rig("Hand");
    let engine = EqualityEngine::default();

    assert!(engine.nodes_equal(&a, &b, None));
}

#[test]
fn test_references_confirmed_by_report() {
    // GIVEN references whose targets are structurally equal but named differently
    let a = rig("Hand");
    let b = rig("Paw");
    let engine = EqualityEngine::default();

    // THEN without a report the paths disagree
    assert!(!engine.nodes_equal(&a, &b, None));

    // AND with a report the already matched targets confirm the references
    let mut report = MatchReport::new();
    assert!(engine.nodes_equal(&a, &b, Some(&mut report)));
    assert_eq!(
        report.pair_tier(a.child("Hand").unwrap(), b.child("Paw").unwrap()),
        MatchTier::ValueEqual
    );
}

#[test]
fn test_reference_kind_must_agree() {
    let a = rig("Hand");
    let mut b = rig("Hand");
    let to_motor = b.component_reference::<Motor>("Hand");
    b.component_mut::<Link>().unwrap().target = to_motor;

    assert!(!EqualityEngine::default().nodes_equal(&a, &b, None));
}

#[derive(Debug, Clone)]
struct Gearbox {
    ratio: f64,
    motor: Motor,
}

impl Comparable for Gearbox {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Gearbox>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder("Gearbox")
                .field("ratio", |g: &Gearbox| g.ratio.into())
                .field("motor", |g: &Gearbox| Value::object(g.motor.clone()))
                .build()
        })
    }
}

#[test]
fn test_nested_values_compare_structurally() {
    let gearbox = |speed| Gearbox {
        ratio: 2.0,
        motor: motor(speed),
    };
    let a = Node::new("Drive").with_component(gearbox(1.0));
    let b = Node::new("Drive").with_component(gearbox(1.0));
    let c = Node::new("Drive").with_component(gearbox(3.0));
    let engine = EqualityEngine::default();

    assert!(engine.nodes_equal(&a, &b, None));

    let mut report = MatchReport::new();
    assert!(!engine.nodes_equal(&a, &c, Some(&mut report)));
    let notes = report.notes(&a.components()[0]);
    assert!(notes.iter().any(|n| n == "speed: 1 != 3"), "{notes:?}");
    assert!(notes.iter().any(|n| n == "motor: Motor != Motor"), "{notes:?}");
}

#[test]
fn test_value_comparison_entry_point() {
    let engine = EqualityEngine::default();
    let mut report = MatchReport::new();

    assert!(engine.values_equal(&Value::from("a"), &Value::from("a"), Some(&mut report)));
    assert!(report.is_equal());

    assert_eq!(
        engine.compare_values(&Value::from(1), &Value::from(2), Some(&mut report)),
        MatchTier::None
    );
    assert!(!report.is_equal());
}
