//! Diff entry points and the delta they return.

use tracing::debug;

use crate::compare::compare_records;
use crate::entity::{AnyEntity, Entity, EntityType};
use crate::error::{DeltaError, DeltaResult};
use crate::policy::EmptyPolicy;

/// Result of diffing two entities.
#[derive(Clone, Debug, PartialEq)]
pub enum Delta<E> {
    /// No field differs; there is nothing to send.
    Unchanged,
    /// A sparse record of the same type holding only the changed fields.
    Changed(E),
    /// The entities report different types. No partial update exists; the
    /// caller must fall back to a full replacement.
    Incomparable { base: EntityType, new: EntityType },
}

impl<E> Delta<E> {
    /// `true` for `Changed` and for `Incomparable`.
    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    pub fn is_incomparable(&self) -> bool {
        matches!(self, Self::Incomparable { .. })
    }

    /// The delta record, if one was built.
    pub fn payload(&self) -> Option<&E> {
        match self {
            Self::Changed(delta) => Some(delta),
            _ => None,
        }
    }

    /// The `(delta, changed)` pair.
    ///
    /// An absent delta together with `changed = true` means the inputs were
    /// incomparable.
    pub fn into_parts(self) -> (Option<E>, bool) {
        match self {
            Self::Unchanged => (None, false),
            Self::Changed(delta) => (Some(delta), true),
            Self::Incomparable { .. } => (None, true),
        }
    }

    /// The delta record, with incomparability turned into an error.
    pub fn into_payload(self) -> DeltaResult<Option<E>> {
        match self {
            Self::Unchanged => Ok(None),
            Self::Changed(delta) => Ok(Some(delta)),
            Self::Incomparable { base, new } => Err(DeltaError::Incomparable { base, new }),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(E) -> U) -> Delta<U> {
        match self {
            Self::Unchanged => Delta::Unchanged,
            Self::Changed(delta) => Delta::Changed(f(delta)),
            Self::Incomparable { base, new } => Delta::Incomparable { base, new },
        }
    }
}

/// Diff `new` against `base`, using each entity's own empty policy.
pub fn diff<E: Entity>(base: &E, new: &E) -> Delta<E> {
    diff_with(base, new, EmptyPolicy::of(base, new))
}

/// Diff `new` against `base` under an explicit empty policy.
pub fn diff_with<E: Entity>(base: &E, new: &E, policy: EmptyPolicy) -> Delta<E> {
    let (base_type, new_type) = (base.entity_type(), new.entity_type());
    if base_type != new_type {
        debug!(base = %base_type, new = %new_type, "entity types differ, full replacement required");
        return Delta::Incomparable {
            base: base_type,
            new: new_type,
        };
    }

    let (delta, changed) = compare_records(base, Some(new), policy);
    debug!(entity_type = %base_type, changed, "entity diff computed");
    if changed {
        Delta::Changed(delta)
    } else {
        Delta::Unchanged
    }
}

/// Diff two type-erased entities, using each entity's own empty policy.
pub fn diff_dyn(base: &dyn AnyEntity, new: &dyn AnyEntity) -> Delta<Box<dyn AnyEntity>> {
    let policy = EmptyPolicy::new(base.treats_nil_as_empty(), new.treats_nil_as_empty());
    diff_dyn_with(base, new, policy)
}

/// Diff two type-erased entities under an explicit empty policy.
pub fn diff_dyn_with(
    base: &dyn AnyEntity,
    new: &dyn AnyEntity,
    policy: EmptyPolicy,
) -> Delta<Box<dyn AnyEntity>> {
    let (base_type, new_type) = (base.kind(), new.kind());
    if base_type != new_type {
        debug!(base = %base_type, new = %new_type, "entity types differ, full replacement required");
        return Delta::Incomparable {
            base: base_type,
            new: new_type,
        };
    }
    base.diff_against(new, policy)
}
