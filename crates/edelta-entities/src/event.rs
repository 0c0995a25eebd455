//! Event entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use edelta_core::{record, Entity, EntityType};

use crate::location::{Address, Labels};

record! {
    /// A scheduled event, optionally tied to one or more locations.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Event {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub starts_at: Option<DateTime<Utc>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ends_at: Option<DateTime<Utc>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub venue: Option<Address>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub linked_locations: Option<Labels>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ticket_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_ticketed: Option<bool>,
    }
}

impl Event {
    pub const ENTITY_TYPE: EntityType = EntityType::from_static("event");
}

impl Entity for Event {
    fn entity_type(&self) -> EntityType {
        Self::ENTITY_TYPE
    }
}
