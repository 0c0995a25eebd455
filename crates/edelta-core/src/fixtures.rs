//! Record types shared by the unit tests.

use serde::Serialize;

use crate::comparable;
use crate::entity::{Entity, EntityType};
use crate::field::Comparable;
use crate::record;

record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct Address {
        pub line1: String,
        pub line2: Option<String>,
        pub city: Option<String>,
    }
}

impl Entity for Address {
    fn entity_type(&self) -> EntityType {
        EntityType::from_static("address")
    }
}

record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct Person {
        pub name: Option<String>,
        pub age: Option<u32>,
        pub addr: Option<Address>,
        pub home: Address,
    }
}

impl Entity for Person {
    fn entity_type(&self) -> EntityType {
        EntityType::from_static("person")
    }
}

/// Tag list compared without regard to order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Tags(pub Vec<String>);

impl Comparable for Tags {
    fn equal(&self, other: &Self) -> bool {
        let mut a = self.0.clone();
        let mut b = other.0.clone();
        a.sort();
        b.sort();
        a == b
    }
}

comparable!(Tags);

record! {
    /// Record whose first field is a non-nullable comparable.
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct Tagged {
        pub tags: Tags,
        pub note: Option<String>,
    }
}

record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct Envelope {
        pub inner: Option<Tagged>,
        pub addr: Option<Address>,
    }
}

record! {
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct Profile {
        pub nickname: Option<String>,
        pub tags: Option<Tags>,
        pub bio: Option<String>,
    }
}

impl Entity for Profile {
    fn entity_type(&self) -> EntityType {
        EntityType::from_static("profile")
    }
}

record! {
    /// Entity whose discriminator is carried in the data.
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct Widget {
        pub kind: String,
        pub size: i64,
    }
}

impl Entity for Widget {
    fn entity_type(&self) -> EntityType {
        EntityType::new(self.kind.clone())
    }
}

record! {
    /// Entity that treats null references as empty on its side.
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct Draft {
        pub title: Option<String>,
        pub body: Option<Address>,
    }
}

impl Entity for Draft {
    fn entity_type(&self) -> EntityType {
        EntityType::from_static("draft")
    }

    fn nil_is_empty(&self) -> bool {
        true
    }
}
