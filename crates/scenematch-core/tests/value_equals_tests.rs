//! End-to-end structural equality
//!
//! ## Scenarios Covered
//!
//! 1. Identity comparisons and self-match records
//! 2. Order independence of children and components
//! 3. Extra children fail the comparison and cascade into the bad set
//! 4. A changed leaf value produces a note on the component from A
//! 5. Strict versus lenient acceptance
//! 6. Type mismatches and name fallback opt-out

mod common;

use common::{cart, cart_reversed, label, motor, origin, Label, Motor, Transform};
use scenematch_core::{
    CompareOptions, EqualityEngine, MatchReport, MatchTier, Node, ValueEquals,
};

#[test]
fn test_identity_is_reference_equal() {
    // GIVEN a cart compared with itself
    let a = cart();
    let engine = EqualityEngine::default();
    let mut report = MatchReport::new();

    // WHEN the engine classifies the pair
    let tier = engine.compare_nodes(&a, &a, Some(&mut report));

    // THEN it is the strongest tier and every subject matches itself
    assert_eq!(tier, MatchTier::ReferenceEqual);
    assert!(report.is_equal());
    let cushion = a.find("Seat/Cushion").unwrap();
    assert_eq!(report.tier_of(cushion), MatchTier::ReferenceEqual);
    assert_eq!(report.match_of(cushion).map(|s| s.id()), Some(cushion.id()));
    assert_eq!(report.tier_of(&cushion.components()[0]), MatchTier::ReferenceEqual);
    assert!(report.bad_matches().is_empty());
}

#[test]
fn test_identity_without_report() {
    let a = cart();
    assert!(a.value_equals(&a, None));
    assert!(a.components()[0].value_equals(&a.components()[0], None));
}

#[test]
fn test_children_and_components_in_any_order() {
    // GIVEN two carts built in opposite order
    let a = cart();
    let b = cart_reversed();

    // WHEN compared with a report attached
    let mut report = MatchReport::new();
    let equal = a.value_equals(&b, Some(&mut report));

    // THEN they are equal and every node found its mirror
    assert!(equal);
    assert!(report.is_equal());
    assert!(report.bad_matches().is_empty());
    for path in ["", "FrontWheel", "RearWheel", "Seat", "Seat/Cushion"] {
        let node_a = a.find(path).unwrap();
        let node_b = b.find(path).unwrap();
        assert_eq!(report.pair_tier(node_a, node_b), MatchTier::ValueEqual, "{path}");
    }

    // AND the answer does not depend on a report being present
    assert!(a.value_equals(&b, None));
    assert!(b.value_equals(&a, None));
}

#[test]
fn test_extra_child_cascades_into_bad_matches() {
    // GIVEN B carrying one child more than A
    let a = cart();
    let mut b = cart();
    b.add_child(
        Node::new("Trailer")
            .with_component(motor(0.5))
            .with_child(Node::new("Hitch").with_component(origin())),
    );

    // WHEN compared
    let mut report = MatchReport::new();
    let equal = a.value_equals(&b, Some(&mut report));

    // THEN the comparison fails
    assert!(!equal);
    assert!(!report.is_equal());

    // AND the unmatched child, its descendants and its components are bad
    let trailer = b.child("Trailer").unwrap();
    let hitch = trailer.child("Hitch").unwrap();
    assert!(report.is_bad(trailer));
    assert!(report.is_bad(hitch));
    assert!(report.is_bad(&trailer.components()[0]));
    assert!(report.is_bad(&hitch.components()[0]));
    assert!(!report.matched(trailer));

    // AND the children that did pair up stay matched
    let front_a = a.child("FrontWheel").unwrap();
    let front_b = b.child("FrontWheel").unwrap();
    assert_eq!(report.pair_tier(front_a, front_b), MatchTier::ValueEqual);
}

#[test]
fn test_changed_leaf_value_is_noted() {
    let a = cart();
    let mut b = cart_reversed();

    // GIVEN equal carts
    {
        let mut report = MatchReport::new();
        assert!(a.value_equals(&b, Some(&mut report)));
    }

    // WHEN B's root motor runs faster
    b.component_mut::<Motor>().unwrap().speed = 6.0;
    let mut report = MatchReport::new();
    let equal = a.value_equals(&b, Some(&mut report));

    // THEN equality fails
    assert!(!equal);
    assert!(!report.is_equal());

    // AND the motor of A carries a note naming the field and both values
    let motor_a = a.components().iter().find(|c| c.is::<Motor>()).unwrap();
    assert!(
        report.notes(motor_a).iter().any(|n| n == "speed: 5 != 6"),
        "notes were {:?}",
        report.notes(motor_a)
    );
    assert_eq!(report.tier_of(motor_a), MatchTier::NamesEqual);
}

#[test]
fn test_strict_and_lenient_acceptance() {
    // GIVEN same-named nodes whose motors differ
    let a = Node::new("Fan").with_component(motor(1.0));
    let b = Node::new("Fan").with_component(motor(2.0));

    let strict = EqualityEngine::new(CompareOptions::strict());
    let lenient = EqualityEngine::new(CompareOptions::lenient());

    // THEN both classify the pair as a name match
    assert_eq!(strict.compare_nodes(&a, &b, None), MatchTier::NamesEqual);
    assert_eq!(lenient.compare_nodes(&a, &b, None), MatchTier::NamesEqual);

    // AND only the lenient engine counts it as equal
    assert!(!strict.nodes_equal(&a, &b, None));
    assert!(lenient.nodes_equal(&a, &b, None));
}

#[test]
fn test_lenient_pairs_children_by_name() {
    let a = Node::new("Rig").with_child(Node::new("Arm").with_component(motor(1.0)));
    let b = Node::new("Rig").with_child(Node::new("Arm").with_component(motor(3.0)));
    let lenient = EqualityEngine::new(CompareOptions::lenient());

    let mut report = MatchReport::new();
    assert!(lenient.nodes_equal(&a, &b, Some(&mut report)));
    assert!(report.is_equal());
    assert_eq!(
        report.pair_tier(&a.children()[0], &b.children()[0]),
        MatchTier::NamesEqual
    );
}

#[test]
fn test_different_names_never_fall_back() {
    let a = Node::new("Fan").with_component(motor(1.0));
    let b = Node::new("Pump").with_component(motor(2.0));
    let lenient = EqualityEngine::new(CompareOptions::lenient());

    assert_eq!(lenient.compare_nodes(&a, &b, None), MatchTier::None);
}

#[test]
fn test_structure_wins_over_names() {
    // names are a fallback only; equal content matches under any name
    let a = Node::new("Left").with_component(motor(1.0));
    let b = Node::new("Right").with_component(motor(1.0));
    assert!(a.value_equals(&b, None));
}

#[test]
fn test_component_type_mismatch() {
    let a = Node::new("Sign").with_component(label("stop"));
    let b = Node::new("Sign").with_component(motor(1.0));
    let engine = EqualityEngine::new(CompareOptions::lenient());

    let tier = engine.compare_components(&a.components()[0], &b.components()[0], None);
    assert_eq!(tier, MatchTier::None);
}

#[test]
fn test_name_fallback_can_be_disabled_per_type() {
    let a = Node::new("Box").with_component(origin());
    let b = Node::new("Box").with_component(Transform {
        position: [1.0, 0.0, 0.0],
        scale: 1.0,
    });
    let lenient = EqualityEngine::new(CompareOptions::lenient());

    // Transform opts out of name matching
    let tier = lenient.compare_components(&a.components()[0], &b.components()[0], None);
    assert_eq!(tier, MatchTier::None);

    // Label does not
    let x = Node::new("Box").with_component(label("a"));
    let y = Node::new("Box").with_component(label("b"));
    let tier = lenient.compare_components(&x.components()[0], &y.components()[0], None);
    assert_eq!(tier, MatchTier::NamesEqual);
    assert!(x.components()[0].is::<Label>());
}

#[test]
fn test_duplicate_is_value_equal() {
    let a = cart();
    let b = a.duplicate();
    let engine = EqualityEngine::default();

    assert_eq!(engine.compare_nodes(&a, &b, None), MatchTier::ValueEqual);
}
