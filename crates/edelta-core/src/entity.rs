//! Entities: top-level records with a type discriminator.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::delta::{diff_with, Delta};
use crate::error::DeltaResult;
use crate::policy::EmptyPolicy;
use crate::record::Record;

/// Discriminator naming an entity's type, e.g. `location` or `event`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityType(Cow<'static, str>);

impl EntityType {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityType({})", self.0)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record that can be diffed at the top level.
pub trait Entity: Record {
    /// Two entities are only comparable if their discriminators match.
    fn entity_type(&self) -> EntityType;

    /// Whether a null reference on this entity's side counts as empty.
    fn nil_is_empty(&self) -> bool {
        false
    }
}

/// Object-safe view of an [`Entity`], for callers holding entities whose
/// concrete types are only known at runtime.
pub trait AnyEntity: fmt::Debug {
    /// The entity's type discriminator.
    fn kind(&self) -> EntityType;

    /// The entity's own empty policy.
    fn treats_nil_as_empty(&self) -> bool;

    fn as_any(&self) -> &dyn Any;

    /// Serialize the entity as JSON.
    fn to_json(&self) -> DeltaResult<serde_json::Value>;

    /// Diff `self` (the base) against `new`.
    ///
    /// Reports [`Delta::Incomparable`] if `new` is not the same concrete type.
    fn diff_against(&self, new: &dyn AnyEntity, policy: EmptyPolicy)
        -> Delta<Box<dyn AnyEntity>>;
}

impl<E> AnyEntity for E
where
    E: Entity + Serialize + fmt::Debug + 'static,
{
    fn kind(&self) -> EntityType {
        Entity::entity_type(self)
    }

    fn treats_nil_as_empty(&self) -> bool {
        Entity::nil_is_empty(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_json(&self) -> DeltaResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn diff_against(
        &self,
        new: &dyn AnyEntity,
        policy: EmptyPolicy,
    ) -> Delta<Box<dyn AnyEntity>> {
        match new.as_any().downcast_ref::<E>() {
            Some(new) => diff_with(self, new, policy).map(|delta| Box::new(delta) as Box<dyn AnyEntity>),
            None => Delta::Incomparable {
                base: self.kind(),
                new: new.kind(),
            },
        }
    }
}
