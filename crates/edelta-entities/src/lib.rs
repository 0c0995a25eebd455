//! API entity record types for the edelta delta engine.
//!
//! Every type here is declared through [`edelta_core::record!`] and
//! serializes sparsely: null references are omitted, so a delta serializes
//! to exactly the partial-update body the API expects.
//!
//! # Key Types
//!
//! - [`Location`] / [`Event`] -- top-level entities
//! - [`Address`] / [`Geo`] / [`Labels`] -- nested records
//! - [`Coordinate`] / [`UnorderedStrings`] -- comparable value types
//! - [`EntityKind`] -- runtime registry of entity types

pub mod event;
pub mod location;
pub mod registry;
pub mod values;

pub use event::Event;
pub use location::{Address, Geo, Labels, Location};
pub use registry::EntityKind;
pub use values::{Coordinate, UnorderedStrings};
