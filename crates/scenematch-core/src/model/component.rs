use scenematch_core_types::{ObjectId, TypeTag};

use crate::accessor::{Comparable, ComponentData};

/// A typed attribute bag attached to a node
///
/// The component's name is the name of the node it is attached to, so two
/// components of the same type on same-named nodes can fall back to a
/// name-only match.
#[derive(Debug)]
pub struct Component {
    id: ObjectId,
    owner_name: String,
    data: Box<dyn ComponentData>,
}

impl Component {
    /// Detached component; attaching it to a node sets its name
    pub fn new<T: Comparable>(data: T) -> Self {
        Self::from_data(Box::new(data))
    }

    pub fn from_data(data: Box<dyn ComponentData>) -> Self {
        Self {
            id: ObjectId::next(),
            owner_name: String::new(),
            data,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Name of the owning node
    pub fn name(&self) -> &str {
        &self.owner_name
    }

    pub fn type_tag(&self) -> TypeTag {
        self.data.type_tag()
    }

    pub fn data(&self) -> &dyn ComponentData {
        self.data.as_ref()
    }

    pub fn is<T: Comparable>(&self) -> bool {
        self.data.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Comparable>(&self) -> Option<&T> {
        self.data.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Comparable>(&mut self) -> Option<&mut T> {
        self.data.as_any_mut().downcast_mut::<T>()
    }

    /// Copy of this component with a fresh identity
    pub fn duplicate(&self) -> Self {
        Self {
            id: ObjectId::next(),
            owner_name: self.owner_name.clone(),
            data: self.data.clone_data(),
        }
    }

    pub(crate) fn set_owner_name(&mut self, name: &str) {
        self.owner_name = name.to_string();
    }
}
