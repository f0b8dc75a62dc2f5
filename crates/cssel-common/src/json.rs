//! JSON text conversion for serde values.
//!
//! `from_json` is how plain data gets its behavior back: the requested type
//! decides what the parsed record becomes, and nothing beyond serde's own
//! field matching is checked.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error type for JSON conversion.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be written as JSON.
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The text was not valid JSON for the requested type.
    #[error("failed to deserialize value: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Serialize a value as compact JSON.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value's `Serialize` impl fails
/// (for example a map with non-string keys).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Serialize a value as indented JSON.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value's `Serialize` impl fails.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string_pretty(value).map_err(JsonError::Serialize)
}

/// Parse JSON text into a value of type `T`.
///
/// # Errors
///
/// Returns [`JsonError::Deserialize`] if the text is not JSON or does not
/// have the shape `T` expects.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    serde_json::from_str(text).map_err(JsonError::Deserialize)
}
