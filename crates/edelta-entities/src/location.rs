//! Location entities and their nested records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use edelta_core::{record, Entity, EntityType};

use crate::values::{Coordinate, UnorderedStrings};

record! {
    /// A postal address.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Address {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub line1: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub line2: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub city: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub region: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub postal_code: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub country_code: Option<String>,
    }
}

record! {
    /// Geographic placement. The coordinate is compared atomically, so it
    /// lives in its own record.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Geo {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub display: Option<Coordinate>,
    }
}

record! {
    /// A set of identifiers compared without regard to order.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Labels {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ids: Option<UnorderedStrings>,
    }
}

record! {
    /// A physical business location.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Location {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub address: Option<Address>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub main_phone: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub website_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub closed: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub geo: Option<Geo>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub categories: Option<Labels>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub keywords: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub custom_fields: Option<BTreeMap<String, serde_json::Value>>,
    }
}

impl Location {
    pub const ENTITY_TYPE: EntityType = EntityType::from_static("location");
}

impl Entity for Location {
    fn entity_type(&self) -> EntityType {
        Self::ENTITY_TYPE
    }
}
