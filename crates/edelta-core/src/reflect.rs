//! Allocation of zero-valued record instances.

use crate::record::Record;

/// A new, independently owned, zero-valued instance of `value`'s type.
///
/// Every delta starts life as one of these; only the fields found to differ
/// are written into it afterwards.
pub fn instance_of<T: Record>(_value: &T) -> T {
    T::default()
}
