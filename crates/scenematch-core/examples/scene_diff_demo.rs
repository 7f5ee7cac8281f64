//! Scene Diff Demonstration
//!
//! Compares an authored scene against an edited copy and prints what the
//! match report knows about every object.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Describing component types with a `Schema`
//! 2. Order-independent comparison of children and components
//! 3. Reading tiers, counterparts and notes back from a `MatchReport`
//! 4. Strict versus lenient acceptance

use scenematch_core::accessor::{Comparable, Schema};
use scenematch_core::logging_facility::{init, Profile};
use scenematch_core::{CompareOptions, EqualityEngine, MatchReport, Node, ValueEquals};
use std::sync::OnceLock;

#[derive(Debug, Clone)]
struct Light {
    intensity: f64,
    color: [u8; 3],
}

impl Comparable for Light {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Light>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder("Light")
                .field("intensity", |l: &Light| l.intensity.into())
                .field("color", |l: &Light| l.color.into())
                .build()
        })
    }
}

#[derive(Debug, Clone)]
struct Prop {
    mesh: String,
}

impl Comparable for Prop {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Prop>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder("Prop")
                .field("mesh", |p: &Prop| p.mesh.as_str().into())
                .build()
        })
    }
}

fn stage() -> Node {
    Node::new("Stage")
        .with_child(Node::new("Key").with_component(Light {
            intensity: 1.0,
            color: [255, 240, 220],
        }))
        .with_child(Node::new("Fill").with_component(Light {
            intensity: 0.4,
            color: [200, 200, 255],
        }))
        .with_child(Node::new("Chair").with_component(Prop {
            mesh: "chair_01".to_string(),
        }))
}

fn main() {
    init(Profile::Development);
    println!("=== Scene Diff Demo ===\n");

    // ===== Part 1: Reordered copy =====
    println!("## Part 1: Order does not matter\n");

    let authored = stage();
    let mut reordered = Node::new("Stage");
    for name in ["Chair", "Fill", "Key"] {
        let child = authored.child(name).expect("authored child").duplicate();
        reordered.add_child(child);
    }
    println!(
        "authored == reordered: {}\n",
        authored.value_equals(&reordered, None)
    );

    // ===== Part 2: An edit, explained by the report =====
    println!("## Part 2: Explaining a difference\n");

    let mut edited = stage();
    edited
        .child_mut("Fill")
        .and_then(|fill| fill.component_mut::<Light>())
        .expect("fill light")
        .intensity = 0.6;

    let mut report = MatchReport::new();
    let equal = authored.value_equals(&edited, Some(&mut report));
    println!("authored == edited: {equal}");
    println!("report: {} records, equal = {}", report.len(), report.is_equal());

    for record in report.all_matches() {
        let counterpart = record
            .counterpart()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  {} -> {} [{}]", record.subject(), counterpart, record.tier());
    }

    let fill = authored.child("Fill").expect("fill");
    for note in report.notes(&fill.components()[0]) {
        println!("  note: {note}");
    }

    // ===== Part 3: Lenient acceptance =====
    println!("\n## Part 3: Lenient acceptance\n");

    let lenient = EqualityEngine::new(CompareOptions::lenient());
    println!(
        "lenient authored == edited: {}",
        lenient.nodes_equal(&authored, &edited, None)
    );
}
