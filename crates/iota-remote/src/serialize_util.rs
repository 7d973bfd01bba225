//! Persisted-form helpers for collections of domain values
//!
//! Persisted values are plain JSON trees (`serde_json::Value`), independent of
//! the wire payload the node receives.

use crate::errors::{RemoteApiError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Convert each value into its persisted representation, preserving order
///
/// # Errors
///
/// Returns `Serialization` if a value cannot be represented as JSON.
pub fn serialize_array<T: Serialize>(values: &[T]) -> Result<Vec<Value>> {
    values
        .iter()
        .map(|v| serde_json::to_value(v).map_err(RemoteApiError::from))
        .collect()
}

/// Rebuild values from their persisted representations, preserving order
///
/// # Errors
///
/// Returns `InvalidPersistedForm` naming the index of the first entry that
/// does not describe a valid `T`.
pub fn deserialize_array<T: DeserializeOwned>(values: &[Value]) -> Result<Vec<T>> {
    values
        .iter()
        .enumerate()
        .map(|(index, v)| {
            T::deserialize(v).map_err(|e| RemoteApiError::InvalidPersistedForm {
                reason: format!("entry {}: {}", index, e),
            })
        })
        .collect()
}
