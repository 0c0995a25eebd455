//! Error types for the delta engine.

use crate::entity::EntityType;

/// Errors surfaced around delta computation.
///
/// The comparison itself never fails: a type mismatch is reported through
/// [`Delta::Incomparable`](crate::Delta::Incomparable). These variants exist
/// for callers that prefer a `Result` and for entity registries.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DeltaError {
    /// The two entities report different type discriminators, so no partial
    /// update can be derived. The caller must send a full replacement.
    #[error("entities are not comparable: base is {base}, new is {new}")]
    Incomparable { base: EntityType, new: EntityType },

    /// No record type is registered under the given entity type name.
    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DeltaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience alias for delta results.
pub type DeltaResult<T> = Result<T, DeltaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomparable_message_names_both_sides() {
        let err = DeltaError::Incomparable {
            base: EntityType::from_static("location"),
            new: EntityType::from_static("event"),
        };
        assert_eq!(
            err.to_string(),
            "entities are not comparable: base is location, new is event"
        );
    }

    #[test]
    fn json_errors_become_serialization_errors() {
        let err: DeltaError = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
        assert!(matches!(err, DeltaError::Serialization(_)));
    }
}
