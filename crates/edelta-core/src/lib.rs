//! Structural delta engine.
//!
//! Compares two records of the same type and builds a *delta*: a fresh,
//! zero-valued record of that type in which only the fields that changed
//! are populated. The delta is the body of a partial-update request.
//!
//! # Key Types
//!
//! - [`Field`] / [`FieldKind`] -- per-type comparison contract (leaf, record, comparable)
//! - [`Record`] / [`record!`] -- records with generated field tables and diff procedures
//! - [`Comparable`] / [`comparable!`] -- value types with atomic custom equality
//! - [`Entity`] / [`AnyEntity`] / [`EntityType`] -- top-level records with a type discriminator
//! - [`EmptyPolicy`] -- per-side "null reference counts as empty" flags
//! - [`Delta`] -- outcome of [`diff`], [`diff_with`] and [`diff_dyn`]
//!
//! # Update semantics
//!
//! A `None` on the new side means "leave unchanged". Sending an explicit
//! zero value (`Some(String::new())`, `Some(Address::default())`) is how a
//! caller clears a field. A comparable field is atomic and dominates its
//! enclosing record: the first one found (in declaration order, with a
//! non-null base) decides whether that record is unchanged or replaced
//! wholesale.

pub mod builder;
pub mod compare;
pub mod delta;
pub mod entity;
pub mod error;
pub mod field;
pub mod policy;
pub mod record;
pub mod reflect;

#[cfg(test)]
mod fixtures;

pub use builder::DeltaBuilder;
pub use compare::compare_records;
pub use delta::{diff, diff_dyn, diff_dyn_with, diff_with, Delta};
pub use entity::{AnyEntity, Entity, EntityType};
pub use error::{DeltaError, DeltaResult};
pub use field::{Comparable, Comparison, Field, FieldKind};
pub use policy::{is_empty, EmptyPolicy};
pub use record::{FieldInfo, Record};
pub use reflect::instance_of;
