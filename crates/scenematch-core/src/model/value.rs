use std::fmt;
use std::sync::Arc;

use scenematch_core_types::{ObjectId, TypeTag};

use crate::accessor::{Comparable, ComponentData};
use crate::errors::AccessFault;

/// What a [`Reference`] points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Node,
    Component(TypeTag),
}

/// Cross reference from a leaf value to a node or component
///
/// References are compared, never followed. The path is the slash-separated
/// child-name path the reference was resolved from and lets references into
/// two duplicated hierarchies correspond even though their targets differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    target: ObjectId,
    kind: ReferenceKind,
    path: String,
}

impl Reference {
    pub fn new(target: ObjectId, kind: ReferenceKind, path: impl Into<String>) -> Self {
        Self {
            target,
            kind,
            path: path.into(),
        }
    }

    pub fn target(&self) -> ObjectId {
        self.target
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A leaf value read from a component member
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Position-stable sequence
    List(Vec<Value>),
    /// Component-shaped nested value, compared through its own schema
    Object(Arc<dyn ComponentData>),
    Reference(Reference),
    /// The member could not be read; never equal to anything
    Unavailable(AccessFault),
}

impl Value {
    /// Wrap a component-shaped value for recursive comparison
    pub fn object<T: Comparable>(value: T) -> Self {
        Value::Object(Arc::new(value))
    }

    /// List from anything convertible into values
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Value::Unavailable(_))
    }

    /// Short name of the value's kind, used in mismatch diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Object(_) => "object",
            Value::Reference(_) => "reference",
            Value::Unavailable(_) => "unavailable",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(data) => write!(f, "{}", data.type_tag()),
            Value::Reference(r) => write!(f, "ref({})", r.path()),
            Value::Unavailable(_) => write!(f, "<unavailable>"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<Reference> for Value {
    fn from(v: Reference) -> Self {
        Value::Reference(v)
    }
}

impl From<AccessFault> for Value {
    fn from(fault: AccessFault) -> Self {
        Value::Unavailable(fault)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::list(items)
    }
}
