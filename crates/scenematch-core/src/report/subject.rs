use std::fmt;

use scenematch_core_types::{ObjectId, TypeTag};

use crate::model::{Component, Node};

/// The node or component a match record is about
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Node(&'a Node),
    Component(&'a Component),
}

impl<'a> Subject<'a> {
    pub fn id(&self) -> ObjectId {
        match *self {
            Subject::Node(node) => node.id(),
            Subject::Component(component) => component.id(),
        }
    }

    /// Node name, or the owning node's name for a component
    pub fn name(&self) -> &'a str {
        match *self {
            Subject::Node(node) => node.name(),
            Subject::Component(component) => component.name(),
        }
    }

    /// Component type; `None` for nodes
    pub fn type_tag(&self) -> Option<TypeTag> {
        match *self {
            Subject::Node(_) => None,
            Subject::Component(component) => Some(component.type_tag()),
        }
    }

    pub fn as_node(&self) -> Option<&'a Node> {
        match *self {
            Subject::Node(node) => Some(node),
            Subject::Component(_) => None,
        }
    }

    pub fn as_component(&self) -> Option<&'a Component> {
        match *self {
            Subject::Node(_) => None,
            Subject::Component(component) => Some(component),
        }
    }
}

impl PartialEq for Subject<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Subject<'_> {}

impl<'a> From<&'a Node> for Subject<'a> {
    fn from(node: &'a Node) -> Self {
        Subject::Node(node)
    }
}

impl<'a> From<&'a Component> for Subject<'a> {
    fn from(component: &'a Component) -> Self {
        Subject::Component(component)
    }
}

impl fmt::Display for Subject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Node(node) => write!(f, "node '{}' ({})", node.name(), node.id()),
            Subject::Component(component) => write!(
                f,
                "{} on '{}' ({})",
                component.type_tag(),
                component.name(),
                component.id()
            ),
        }
    }
}

/// Anything a report can be queried about
pub trait Identified {
    fn object_id(&self) -> ObjectId;
}

impl Identified for ObjectId {
    fn object_id(&self) -> ObjectId {
        *self
    }
}

impl Identified for Node {
    fn object_id(&self) -> ObjectId {
        self.id()
    }
}

impl Identified for Component {
    fn object_id(&self) -> ObjectId {
        self.id()
    }
}

impl Identified for Subject<'_> {
    fn object_id(&self) -> ObjectId {
        self.id()
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn object_id(&self) -> ObjectId {
        (**self).object_id()
    }
}
