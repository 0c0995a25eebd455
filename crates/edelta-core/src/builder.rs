//! Delta assembly for one recursion frame.

use std::ops::ControlFlow;

use tracing::trace;

use crate::field::{Comparison, Field};
use crate::policy::EmptyPolicy;
use crate::record::Record;
use crate::reflect::instance_of;

/// Accumulates the delta for one pair of records.
///
/// The delta is allocated zero-valued on construction. Each call to
/// [`field`](DeltaBuilder::field) compares one field and writes the new
/// value (or nested delta) into the delta when it differs. A comparable
/// field ends the frame early through `ControlFlow::Break`.
pub struct DeltaBuilder<'a, T> {
    base: &'a T,
    new: &'a T,
    policy: EmptyPolicy,
    delta: T,
    changed: bool,
}

impl<'a, T: Record> DeltaBuilder<'a, T> {
    pub fn new(base: &'a T, new: &'a T, policy: EmptyPolicy) -> Self {
        Self {
            base,
            new,
            policy,
            delta: instance_of(base),
            changed: false,
        }
    }

    /// Compare one field, reached through `get` and written through `get_mut`.
    pub fn field<F: Field>(
        &mut self,
        name: &'static str,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> ControlFlow<Comparison<T>> {
        match F::compare(get(self.base), get(self.new), self.policy) {
            Comparison::Unchanged => ControlFlow::Continue(()),
            Comparison::Changed(value) => {
                trace!(field = name, "field changed");
                *get_mut(&mut self.delta) = value;
                self.changed = true;
                ControlFlow::Continue(())
            }
            Comparison::AtomicEqual => {
                trace!(field = name, "comparable field equal, record unchanged");
                ControlFlow::Break(Comparison::Unchanged)
            }
            Comparison::AtomicUnequal => {
                trace!(field = name, "comparable field differs, record replaced");
                ControlFlow::Break(Comparison::Changed(self.new.clone()))
            }
        }
    }

    /// Whether any field has been written so far.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn finish(self) -> Comparison<T> {
        if self.changed {
            Comparison::Changed(self.delta)
        } else {
            Comparison::Unchanged
        }
    }
}
