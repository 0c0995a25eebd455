//! Records: named aggregates of diffable fields.
//!
//! Record types are declared through the [`record!`](crate::record) macro,
//! which emits the struct unchanged together with a static field table and a
//! generated [`Record::diff_fields`]. Every declared field must implement
//! [`Field`], so a field that cannot be diffed is a compile error rather
//! than a silently skipped slot.

use serde::Serialize;

use crate::field::{Comparison, Field, FieldKind};
use crate::policy::EmptyPolicy;

/// Static description of one record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    /// The Rust field name.
    pub name: &'static str,
    /// How the field is compared.
    pub kind: FieldKind,
    /// Whether the field is a nullable reference.
    pub nullable: bool,
}

/// A record type with a generated field table and diff procedure.
pub trait Record: Field {
    /// Field descriptors in declaration order.
    const FIELDS: &'static [FieldInfo];

    /// Compare `base` with `new` field by field.
    ///
    /// Returns `Changed(delta)` where `delta` is a zero-valued record with
    /// only the differing fields populated, or the full `new` record when a
    /// comparable field is unequal. Never returns an atomic verdict.
    fn diff_fields(base: &Self, new: &Self, policy: EmptyPolicy) -> Comparison<Self>;

    /// Look up a field descriptor by name.
    fn field_info(name: &str) -> Option<&'static FieldInfo> {
        Self::FIELDS.iter().find(|info| info.name == name)
    }
}

/// Declare a record type.
///
/// ```
/// edelta_core::record! {
///     #[derive(Clone, Debug, Default, PartialEq)]
///     pub struct Address {
///         pub line1: String,
///         pub city: Option<String>,
///     }
/// }
///
/// use edelta_core::Record;
/// assert_eq!(Address::FIELDS.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            const FIELDS: &'static [$crate::FieldInfo] = &[
                $(
                    $crate::FieldInfo {
                        name: ::core::stringify!($field),
                        kind: <$ty as $crate::Field>::KIND,
                        nullable: <$ty as $crate::Field>::NULLABLE,
                    },
                )*
            ];

            #[allow(unused_mut)]
            fn diff_fields(
                base: &Self,
                new: &Self,
                policy: $crate::EmptyPolicy,
            ) -> $crate::Comparison<Self> {
                let mut builder = $crate::DeltaBuilder::new(base, new, policy);
                $(
                    if let ::core::ops::ControlFlow::Break(verdict) = builder.field(
                        ::core::stringify!($field),
                        |record: &Self| &record.$field,
                        |record: &mut Self| &mut record.$field,
                    ) {
                        return verdict;
                    }
                )*
                builder.finish()
            }
        }

        impl $crate::Field for $name {
            const KIND: $crate::FieldKind = $crate::FieldKind::Record;

            fn is_empty_value(&self, nil_is_empty: bool) -> bool {
                let _ = nil_is_empty;
                true $(&& $crate::Field::is_empty_value(&self.$field, nil_is_empty))*
            }

            fn compare(
                base: &Self,
                new: &Self,
                policy: $crate::EmptyPolicy,
            ) -> $crate::Comparison<Self> {
                <Self as $crate::Record>::diff_fields(base, new, policy)
            }
        }
    };
}
