use std::fmt;

use scenematch_core_types::TypeTag;

use super::policy::{ExclusionPolicy, MemberClass};
use crate::errors::AccessFault;
use crate::model::Value;

type Getter<T> = Box<dyn Fn(&T) -> Result<Value, AccessFault> + Send + Sync>;

/// Fields are compared independently from properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
}

/// A named, classified getter
pub struct Member<T> {
    name: &'static str,
    kind: MemberKind,
    class: MemberClass,
    getter: Getter<T>,
}

impl<T> Member<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn class(&self) -> MemberClass {
        self.class
    }

    /// Read the member; a failing getter yields `Value::Unavailable`
    pub fn read(&self, target: &T) -> Value {
        (self.getter)(target).unwrap_or_else(Value::Unavailable)
    }
}

impl<T> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}

/// Ordered comparable members of one type
#[derive(Debug)]
pub struct Schema<T> {
    name: &'static str,
    members: Vec<Member<T>>,
    excluded: Vec<&'static str>,
    name_fallback: bool,
}

impl<T: 'static> Schema<T> {
    pub fn builder(name: &'static str) -> SchemaBuilder<T> {
        SchemaBuilder {
            schema: Schema {
                name,
                members: Vec::new(),
                excluded: Vec::new(),
                name_fallback: true,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_tag(&self) -> TypeTag {
        TypeTag::named::<T>(self.name)
    }

    pub fn members(&self) -> &[Member<T>] {
        &self.members
    }

    pub fn name_fallback(&self) -> bool {
        self.name_fallback
    }

    pub fn is_excluded(&self, member: &str) -> bool {
        self.excluded.iter().any(|excluded| *excluded == member)
    }

    /// Members of `kind` that survive both the policy and per-type exclusions
    pub fn comparable<'s>(
        &'s self,
        kind: MemberKind,
        policy: &'s ExclusionPolicy,
    ) -> impl Iterator<Item = &'s Member<T>> + 's {
        self.members.iter().filter(move |m| {
            m.kind == kind && !policy.excludes(m.class) && !self.is_excluded(m.name)
        })
    }
}

/// Builder returned by [`Schema::builder`]
pub struct SchemaBuilder<T> {
    schema: Schema<T>,
}

impl<T: 'static> SchemaBuilder<T> {
    /// Stored field with an infallible getter
    pub fn field<F>(self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.member(MemberKind::Field, MemberClass::Stored, name, move |t| {
            Ok(get(t))
        })
    }

    /// Stored property with an infallible getter
    pub fn property<F>(self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.member(MemberKind::Property, MemberClass::Stored, name, move |t| {
            Ok(get(t))
        })
    }

    /// Stored property whose getter can fail
    pub fn try_property<F>(self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> Result<Value, AccessFault> + Send + Sync + 'static,
    {
        self.member(MemberKind::Property, MemberClass::Stored, name, get)
    }

    pub fn member<F>(
        mut self,
        kind: MemberKind,
        class: MemberClass,
        name: &'static str,
        get: F,
    ) -> Self
    where
        F: Fn(&T) -> Result<Value, AccessFault> + Send + Sync + 'static,
    {
        self.schema.members.push(Member {
            name,
            kind,
            class,
            getter: Box::new(get),
        });
        self
    }

    /// Leave a member out of comparison regardless of its class
    pub fn exclude(mut self, member: &'static str) -> Self {
        self.schema.excluded.push(member);
        self
    }

    pub fn name_fallback(mut self, enabled: bool) -> Self {
        self.schema.name_fallback = enabled;
        self
    }

    pub fn build(self) -> Schema<T> {
        self.schema
    }
}
