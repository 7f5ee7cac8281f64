//! Shared fixtures: a handful of component types and scene builders

#![allow(dead_code)]

use scenematch_core::accessor::{Comparable, MemberClass, MemberKind, Schema};
use scenematch_core::logging_facility::Logger;
use scenematch_core::{AccessFault, Node, Reference, Value};
use std::sync::{Mutex, OnceLock};

#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub position: [f64; 3],
    pub scale: f64,
}

impl Comparable for Transform {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Transform>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder("Transform")
                .field("position", |t: &Transform| t.position.into())
                .field("scale", |t: &Transform| t.scale.into())
                .name_fallback(false)
                .build()
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Motor {
    pub speed: f64,
    pub enabled: bool,
}

impl Comparable for Motor {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Motor>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder("Motor")
                .field("speed", |m: &Motor| m.speed.into())
                .property("enabled", |m: &Motor| m.enabled.into())
                .build()
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
}

impl Comparable for Label {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Label>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder("Label")
                .field("text", |l: &Label| l.text.as_str().into())
                .build()
        })
    }
}

/// Renderer with state that is excluded by default
#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    pub color: String,
    pub bounds: f64,
    pub visible: bool,
}

impl Comparable for Renderer {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Renderer>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder("Renderer")
                .field("color", |r: &Renderer| r.color.as_str().into())
                .member(MemberKind::Property, MemberClass::Derived, "bounds", |r| {
                    Ok(r.bounds.into())
                })
                .member(MemberKind::Property, MemberClass::Volatile, "visible", |r| {
                    Ok(r.visible.into())
                })
                .build()
        })
    }
}

/// Sensor whose reading is unreadable until it has been sampled
#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    pub reading: Option<f64>,
}

impl Comparable for Sensor {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Sensor>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder("Sensor")
                .try_property("reading", |s: &Sensor| {
                    s.reading
                        .map(Value::from)
                        .ok_or_else(|| AccessFault::new("reading", "sensor not sampled"))
                })
                .build()
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub target: Option<Reference>,
}

impl Comparable for Link {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Link>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder("Link")
                .field("target", |l: &Link| l.target.clone().into())
                .build()
        })
    }
}

pub fn motor(speed: f64) -> Motor {
    Motor {
        speed,
        enabled: true,
    }
}

pub fn origin() -> Transform {
    Transform {
        position: [0.0, 0.0, 0.0],
        scale: 1.0,
    }
}

pub fn label(text: &str) -> Label {
    Label {
        text: text.to_string(),
    }
}

/// A small cart: two wheels and a seat under a root carrying a motor
pub fn cart() -> Node {
    Node::new("Cart")
        .with_component(origin())
        .with_component(motor(5.0))
        .with_child(Node::new("FrontWheel").with_component(motor(1.0)))
        .with_child(Node::new("RearWheel").with_component(motor(2.0)))
        .with_child(
            Node::new("Seat")
                .with_component(label("driver"))
                .with_child(Node::new("Cushion").with_component(label("soft"))),
        )
}

/// The same cart, built with every child and component list reversed
pub fn cart_reversed() -> Node {
    Node::new("Cart")
        .with_child(
            Node::new("Seat")
                .with_child(Node::new("Cushion").with_component(label("soft")))
                .with_component(label("driver")),
        )
        .with_child(Node::new("RearWheel").with_component(motor(2.0)))
        .with_child(Node::new("FrontWheel").with_component(motor(1.0)))
        .with_component(motor(5.0))
        .with_component(origin())
}

/// Logger that keeps every line
#[derive(Default)]
pub struct Recorder {
    lines: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.lines().iter().any(|line| line.contains(fragment))
    }
}

impl Logger for Recorder {
    fn log(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("log: {message}"));
    }

    fn warn(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("warn: {message}"));
    }
}
