use scenematch_core_types::{ObjectId, TypeTag};

use super::component::Component;
use super::value::{Reference, ReferenceKind};
use crate::accessor::Comparable;

/// A vertex in a compared hierarchy
///
/// Children are owned, so a hierarchy is always a tree. Cross links between
/// nodes are expressed as [`Reference`] values, which the engine compares
/// but never follows.
#[derive(Debug)]
pub struct Node {
    id: ObjectId,
    name: String,
    children: Vec<Node>,
    components: Vec<Component>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ObjectId::next(),
            name: name.into(),
            children: Vec::new(),
            components: Vec::new(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the node; attached components follow
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        for component in &mut self.components {
            component.set_owner_name(&self.name);
        }
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_component<T: Comparable>(mut self, data: T) -> Self {
        self.add_component(data);
        self
    }

    /// Append a child and return it for further building
    pub fn add_child(&mut self, child: Node) -> &mut Node {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    pub fn add_component<T: Comparable>(&mut self, data: T) -> &mut Component {
        self.attach(Component::new(data))
    }

    /// Attach an existing component, taking over its name
    pub fn attach(&mut self, mut component: Component) -> &mut Component {
        component.set_owner_name(&self.name);
        let index = self.components.len();
        self.components.push(component);
        &mut self.components[index]
    }

    pub fn remove_child(&mut self, name: &str) -> Option<Node> {
        let index = self.children.iter().position(|c| c.name == name)?;
        Some(self.children.remove(index))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// First child with the given name
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// First attached component of type `T`
    pub fn component<T: Comparable>(&self) -> Option<&T> {
        self.components.iter().find_map(|c| c.downcast_ref::<T>())
    }

    pub fn component_mut<T: Comparable>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find_map(|c| c.downcast_mut::<T>())
    }

    /// Resolve a slash-separated path of child names ("" is this node)
    pub fn find(&self, path: &str) -> Option<&Node> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| node.child(segment))
    }

    pub fn find_mut(&mut self, path: &str) -> Option<&mut Node> {
        let mut node = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = node.child_mut(segment)?;
        }
        Some(node)
    }

    /// Reference to the node at `path`
    pub fn reference_to(&self, path: &str) -> Option<Reference> {
        let target = self.find(path)?;
        Some(Reference::new(target.id, ReferenceKind::Node, path))
    }

    /// Reference to the `T` component of the node at `path`
    pub fn component_reference<T: Comparable>(&self, path: &str) -> Option<Reference> {
        let target = self.find(path)?.components.iter().find(|c| c.is::<T>())?;
        Some(Reference::new(
            target.id(),
            ReferenceKind::Component(TypeTag::of::<T>()),
            path,
        ))
    }

    /// Deep copy with fresh identities for every node and component
    ///
    /// References held in component values keep their original targets.
    pub fn duplicate(&self) -> Self {
        Self {
            id: ObjectId::next(),
            name: self.name.clone(),
            children: self.children.iter().map(Node::duplicate).collect(),
            components: self.components.iter().map(Component::duplicate).collect(),
        }
    }

    /// Pre-order walk over this node and everything below it
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Iterator returned by [`Node::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
