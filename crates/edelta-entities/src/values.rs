//! Value types with custom atomic equality.

use serde::{Deserialize, Serialize};

use edelta_core::{comparable, Comparable};

/// Coordinates closer than this (in degrees) are considered the same point.
pub const COORDINATE_TOLERANCE: f64 = 1e-7;

/// A latitude/longitude pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Comparable for Coordinate {
    fn equal(&self, other: &Self) -> bool {
        (self.latitude - other.latitude).abs() < COORDINATE_TOLERANCE
            && (self.longitude - other.longitude).abs() < COORDINATE_TOLERANCE
    }
}

/// A list of strings whose order carries no meaning (ids, category codes).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnorderedStrings(pub Vec<String>);

impl UnorderedStrings {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn sorted(&self) -> Vec<&str> {
        let mut items: Vec<&str> = self.0.iter().map(String::as_str).collect();
        items.sort_unstable();
        items
    }
}

impl Comparable for UnorderedStrings {
    fn equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.sorted() == other.sorted()
    }
}

comparable!(Coordinate, UnorderedStrings);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_within_tolerance_are_equal() {
        let a = Coordinate::new(38.8977, -77.0365);
        let b = Coordinate::new(38.89770001, -77.03650001);
        assert!(a.equal(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn coordinates_outside_tolerance_differ() {
        let a = Coordinate::new(38.8977, -77.0365);
        let b = Coordinate::new(38.8978, -77.0365);
        assert!(!a.equal(&b));
    }

    #[test]
    fn unordered_strings_ignore_order() {
        let a = UnorderedStrings::new(["x", "y", "z"]);
        let b = UnorderedStrings::new(["z", "x", "y"]);
        assert!(a.equal(&b));
    }

    #[test]
    fn unordered_strings_respect_multiplicity() {
        let a = UnorderedStrings::new(["x", "x", "y"]);
        let b = UnorderedStrings::new(["x", "y", "y"]);
        assert!(!a.equal(&b));
        assert!(!a.equal(&UnorderedStrings::new(["x", "y"])));
    }

    #[test]
    fn unordered_strings_serialize_as_array() {
        let json = serde_json::to_value(UnorderedStrings::new(["a", "b"])).unwrap();
        assert_eq!(json, serde_json::json!(["a", "b"]));
    }
}
