//! Field-level comparison.
//!
//! Every type that can appear as a record field implements [`Field`]. The
//! implementation decides how a pair of values is compared:
//!
//! - **Leaf** values (scalars, strings, collections) are skipped when both
//!   sides are empty and otherwise compared with `PartialEq`.
//! - **Record** values recurse field by field (see [`Record`](crate::Record)).
//! - **Comparable** values are compared atomically through
//!   [`Comparable::equal`], and the verdict decides the whole enclosing record.
//!
//! `Option<T>` is the nullable reference: a `None` on the new side always
//! means "leave unchanged", never "clear".

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use serde::{Deserialize, Serialize};

use crate::policy::EmptyPolicy;

/// Compile-time classification of a field type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Compared as a whole with `PartialEq`.
    Leaf,
    /// A nested record, compared field by field.
    Record,
    /// A value type with custom atomic equality.
    Comparable,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => write!(f, "leaf"),
            Self::Record => write!(f, "record"),
            Self::Comparable => write!(f, "comparable"),
        }
    }
}

/// Outcome of comparing one pair of values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Comparison<T> {
    /// Nothing to send for this value.
    Unchanged,
    /// The value differs; the payload is what goes into the delta.
    Changed(T),
    /// A comparable value was found equal. The enclosing record is
    /// reported unchanged and its remaining fields are not inspected.
    AtomicEqual,
    /// A comparable value was found unequal. The enclosing record is
    /// replaced wholesale by the new side.
    AtomicUnequal,
}

impl<T> Comparison<T> {
    /// Returns `true` for `Changed` and `AtomicUnequal`.
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_) | Self::AtomicUnequal)
    }

    /// Map the payload of a `Changed` outcome.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Comparison<U> {
        match self {
            Self::Unchanged => Comparison::Unchanged,
            Self::Changed(value) => Comparison::Changed(f(value)),
            Self::AtomicEqual => Comparison::AtomicEqual,
            Self::AtomicUnequal => Comparison::AtomicUnequal,
        }
    }
}

/// A type that can be diffed as a record field.
pub trait Field: Clone + Default + PartialEq {
    /// How values of this type are compared.
    const KIND: FieldKind;

    /// Whether the type is a nullable reference.
    const NULLABLE: bool = false;

    /// Returns `true` if the value is empty under `nil_is_empty`.
    fn is_empty_value(&self, nil_is_empty: bool) -> bool;

    /// Compare a base value with a new value.
    fn compare(base: &Self, new: &Self, policy: EmptyPolicy) -> Comparison<Self>;
}

/// Atomic equality for value types that must not be merged field by field.
///
/// Wire a type into diffing with [`comparable!`](crate::comparable).
pub trait Comparable {
    fn equal(&self, other: &Self) -> bool;
}

/// Leaf comparison: skip when both sides are empty, otherwise send the new
/// value if it differs.
pub fn compare_leaf<T: Field>(base: &T, new: &T, policy: EmptyPolicy) -> Comparison<T> {
    if base.is_empty_value(policy.nil_is_empty_base) && new.is_empty_value(policy.nil_is_empty_new)
    {
        return Comparison::Unchanged;
    }
    if base == new {
        Comparison::Unchanged
    } else {
        Comparison::Changed(new.clone())
    }
}

/// Implement [`Field`] for types compared as a whole.
///
/// A leaf is empty when it equals its `Default` value.
#[macro_export]
macro_rules! leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Field for $ty {
                const KIND: $crate::FieldKind = $crate::FieldKind::Leaf;

                fn is_empty_value(&self, _nil_is_empty: bool) -> bool {
                    *self == <$ty as ::core::default::Default>::default()
                }

                fn compare(
                    base: &Self,
                    new: &Self,
                    policy: $crate::EmptyPolicy,
                ) -> $crate::Comparison<Self> {
                    $crate::field::compare_leaf(base, new, policy)
                }
            }
        )*
    };
}

/// Implement [`Field`] for types that implement [`Comparable`].
///
/// An unequal comparable field replaces its whole enclosing record with the
/// new side. An equal one marks the enclosing record unchanged without
/// looking at the remaining fields. Give each comparable value its own small
/// record when sibling fields should still merge.
#[macro_export]
macro_rules! comparable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Field for $ty {
                const KIND: $crate::FieldKind = $crate::FieldKind::Comparable;

                fn is_empty_value(&self, _nil_is_empty: bool) -> bool {
                    *self == <$ty as ::core::default::Default>::default()
                }

                fn compare(
                    base: &Self,
                    new: &Self,
                    _policy: $crate::EmptyPolicy,
                ) -> $crate::Comparison<Self> {
                    if $crate::Comparable::equal(base, new) {
                        $crate::Comparison::AtomicEqual
                    } else {
                        $crate::Comparison::AtomicUnequal
                    }
                }
            }
        )*
    };
}

crate::leaf!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    serde_json::Value,
    chrono::DateTime<chrono::Utc>,
);

impl<T: Clone + PartialEq> Field for Vec<T> {
    const KIND: FieldKind = FieldKind::Leaf;

    fn is_empty_value(&self, _nil_is_empty: bool) -> bool {
        self.is_empty()
    }

    fn compare(base: &Self, new: &Self, policy: EmptyPolicy) -> Comparison<Self> {
        compare_leaf(base, new, policy)
    }
}

impl<K: Ord + Clone, V: Clone + PartialEq> Field for BTreeMap<K, V> {
    const KIND: FieldKind = FieldKind::Leaf;

    fn is_empty_value(&self, _nil_is_empty: bool) -> bool {
        self.is_empty()
    }

    fn compare(base: &Self, new: &Self, policy: EmptyPolicy) -> Comparison<Self> {
        compare_leaf(base, new, policy)
    }
}

impl<T: Ord + Clone> Field for BTreeSet<T> {
    const KIND: FieldKind = FieldKind::Leaf;

    fn is_empty_value(&self, _nil_is_empty: bool) -> bool {
        self.is_empty()
    }

    fn compare(base: &Self, new: &Self, policy: EmptyPolicy) -> Comparison<Self> {
        compare_leaf(base, new, policy)
    }
}

impl<K, V, S> Field for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone + PartialEq,
    S: BuildHasher + Default + Clone,
{
    const KIND: FieldKind = FieldKind::Leaf;

    fn is_empty_value(&self, _nil_is_empty: bool) -> bool {
        self.is_empty()
    }

    fn compare(base: &Self, new: &Self, policy: EmptyPolicy) -> Comparison<Self> {
        compare_leaf(base, new, policy)
    }
}

impl<T, S> Field for HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default + Clone,
{
    const KIND: FieldKind = FieldKind::Leaf;

    fn is_empty_value(&self, _nil_is_empty: bool) -> bool {
        self.is_empty()
    }

    fn compare(base: &Self, new: &Self, policy: EmptyPolicy) -> Comparison<Self> {
        compare_leaf(base, new, policy)
    }
}

impl<T: Field> Field for Box<T> {
    const KIND: FieldKind = T::KIND;
    const NULLABLE: bool = T::NULLABLE;

    fn is_empty_value(&self, nil_is_empty: bool) -> bool {
        (**self).is_empty_value(nil_is_empty)
    }

    fn compare(base: &Self, new: &Self, policy: EmptyPolicy) -> Comparison<Self> {
        T::compare(base, new, policy).map(Box::new)
    }
}

impl<T: Field> Field for Option<T> {
    const KIND: FieldKind = T::KIND;
    const NULLABLE: bool = true;

    fn is_empty_value(&self, nil_is_empty: bool) -> bool {
        match self {
            Some(value) => value.is_empty_value(nil_is_empty),
            None => nil_is_empty,
        }
    }

    fn compare(base: &Self, new: &Self, policy: EmptyPolicy) -> Comparison<Self> {
        // A null new value leaves the field alone.
        let Some(new_value) = new else {
            return Comparison::Unchanged;
        };

        match (T::KIND, base) {
            (FieldKind::Comparable, Some(base_value)) => {
                T::compare(base_value, new_value, policy).map(Some)
            }
            (FieldKind::Record, Some(base_value)) => {
                // An empty new record over a populated base is an explicit clear.
                if new.is_empty_value(policy.nil_is_empty_new)
                    && !base.is_empty_value(policy.nil_is_empty_base)
                {
                    return Comparison::Changed(new.clone());
                }
                T::compare(base_value, new_value, policy).map(Some)
            }
            // Leaves, and references with a null base, compare as whole values.
            _ => compare_leaf(base, new, policy),
        }
    }
}
