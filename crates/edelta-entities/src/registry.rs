//! Runtime lookup of entity types by name.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use edelta_core::{AnyEntity, DeltaError, DeltaResult, EntityType, FieldInfo, Record};

use crate::event::Event;
use crate::location::Location;

/// The entity types known to this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Location,
    Event,
}

impl EntityKind {
    /// Every registered kind.
    pub const ALL: [EntityKind; 2] = [EntityKind::Location, EntityKind::Event];

    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Location => Location::ENTITY_TYPE,
            Self::Event => Event::ENTITY_TYPE,
        }
    }

    /// Field descriptors of the kind's record type.
    pub fn fields(&self) -> &'static [FieldInfo] {
        match self {
            Self::Location => Location::FIELDS,
            Self::Event => Event::FIELDS,
        }
    }

    /// Decode a JSON document into a boxed entity of this kind.
    pub fn decode(&self, value: serde_json::Value) -> DeltaResult<Box<dyn AnyEntity>> {
        debug!(kind = %self, "decoding entity");
        let entity: Box<dyn AnyEntity> = match self {
            Self::Location => Box::new(serde_json::from_value::<Location>(value)?),
            Self::Event => Box::new(serde_json::from_value::<Event>(value)?),
        };
        Ok(entity)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entity_type())
    }
}

impl FromStr for EntityKind {
    type Err = DeltaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.entity_type().as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DeltaError::UnknownEntityType(s.to_string()))
    }
}
