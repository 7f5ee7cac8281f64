//! Value accessor
//!
//! Every comparable type registers a [`Schema`]: the ordered list of its
//! fields and properties, each with a getter and a [`MemberClass`]. The
//! [`ExclusionPolicy`] drops whole member classes (derived state, shared
//! resources, identity, volatile engine state) before comparison, and a
//! schema may exclude individual members by name.

pub mod policy;
pub mod schema;

use std::any::Any;
use std::fmt;

use scenematch_core_types::TypeTag;

use crate::model::Value;

pub use policy::{ExclusionPolicy, MemberClass};
pub use schema::{Member, MemberKind, Schema, SchemaBuilder};

/// A type whose values can be compared structurally
///
/// Implementors return a schema cached in a `OnceLock` static:
///
/// ```
/// use std::sync::OnceLock;
/// use scenematch_core::accessor::{Comparable, Schema};
///
/// #[derive(Debug, Clone)]
/// struct Motor {
///     speed: f64,
/// }
///
/// impl Comparable for Motor {
///     fn schema() -> &'static Schema<Self> {
///         static SCHEMA: OnceLock<Schema<Motor>> = OnceLock::new();
///         SCHEMA.get_or_init(|| {
///             Schema::builder("Motor")
///                 .field("speed", |m: &Motor| m.speed.into())
///                 .build()
///         })
///     }
/// }
/// ```
pub trait Comparable: Any + Clone + fmt::Debug + Send + Sync {
    fn schema() -> &'static Schema<Self>;
}

/// One named leaf value read through a schema
#[derive(Debug, Clone)]
pub struct Leaf {
    pub name: &'static str,
    pub value: Value,
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Type-erased view of a [`Comparable`] value
///
/// Implemented for every `Comparable`; components and nested object values
/// store their payload behind this trait.
pub trait ComponentData: Any + fmt::Debug + Send + Sync {
    fn type_tag(&self) -> TypeTag;

    /// Whether a same-type pair on same-named nodes may match by name alone
    fn name_fallback(&self) -> bool;

    /// Comparable leaves of one member kind, in declaration order
    fn leaves(&self, kind: MemberKind, policy: &ExclusionPolicy) -> Vec<Leaf>;

    fn clone_data(&self) -> Box<dyn ComponentData>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Comparable> ComponentData for T {
    fn type_tag(&self) -> TypeTag {
        T::schema().type_tag()
    }

    fn name_fallback(&self) -> bool {
        T::schema().name_fallback()
    }

    fn leaves(&self, kind: MemberKind, policy: &ExclusionPolicy) -> Vec<Leaf> {
        T::schema()
            .comparable(kind, policy)
            .map(|member| Leaf {
                name: member.name(),
                value: member.read(self),
            })
            .collect()
    }

    fn clone_data(&self) -> Box<dyn ComponentData> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
