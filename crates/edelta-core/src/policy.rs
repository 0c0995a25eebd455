//! Zero-value policy: deciding whether a field value is effectively unset.
//!
//! A value is *empty* when it equals its type's natural zero value. A null
//! reference (`None`) is additionally empty when the side it belongs to has
//! `nil_is_empty` enabled. Callers choose this per side, so "absent" and
//! "explicitly empty" can either collapse into the same bucket or stay
//! distinct.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::field::Field;

/// The per-side empty policy passed alongside a pair of records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EmptyPolicy {
    /// Treat a null reference on the base side as empty.
    pub nil_is_empty_base: bool,
    /// Treat a null reference on the new side as empty.
    pub nil_is_empty_new: bool,
}

impl EmptyPolicy {
    /// Null references are never empty on either side.
    pub const STRICT: Self = Self {
        nil_is_empty_base: false,
        nil_is_empty_new: false,
    };

    /// Null references are empty on both sides.
    pub const LENIENT: Self = Self {
        nil_is_empty_base: true,
        nil_is_empty_new: true,
    };

    pub fn new(nil_is_empty_base: bool, nil_is_empty_new: bool) -> Self {
        Self {
            nil_is_empty_base,
            nil_is_empty_new,
        }
    }

    /// Read the policy each entity declares for itself.
    pub fn of<E: Entity>(base: &E, new: &E) -> Self {
        Self::new(base.nil_is_empty(), new.nil_is_empty())
    }
}

/// Returns `true` if `value` counts as empty under `nil_is_empty`.
pub fn is_empty<T: Field>(value: &T, nil_is_empty: bool) -> bool {
    value.is_empty_value(nil_is_empty)
}
