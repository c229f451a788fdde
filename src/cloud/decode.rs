//! Response decoding
//!
//! Turns a fetched body into typed values, and unwraps the per-item
//! `{"Value": .., "Error": ..}` envelope some list endpoints use.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

/// Decode a successful response body into `T`
///
/// Integers are parsed straight into the target's integer fields, never
/// through `f64`. An empty body is treated as JSON `null`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_slice(b"null");
    }
    serde_json::from_slice(body)
}

/// Field deserializer that reads JSON `null` as the type's default
///
/// The API sends empty strings, lists and objects as `null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One entry of a list response whose items can fail independently
///
/// A missing or `null` value reads as `T::default()`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ListItem<T> {
    #[serde(rename = "Value", default, deserialize_with = "null_as_default")]
    value: T,
    #[serde(rename = "Error")]
    error: Option<Box<RawValue>>,
}

/// Outcome of a single [`ListItem`]
#[derive(Debug)]
pub enum ItemOutcome<T> {
    Value(T),
    /// Raw JSON text of the entry's error slot
    Error(String),
}

impl<T> ListItem<T> {
    /// Classify the entry; a non-null error slot always wins over the value
    pub fn into_outcome(self) -> ItemOutcome<T> {
        match self.error {
            Some(error) => ItemOutcome::Error(error.get().to_string()),
            None => ItemOutcome::Value(self.value),
        }
    }
}

/// First failing entry of an envelope list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    /// Zero-based position in the response
    pub index: usize,
    /// Raw JSON text of the error slot
    pub payload: String,
}

/// Unwrap every entry, or report the first one that failed
///
/// No partial list is ever returned.
pub fn unwrap_items<T>(items: Vec<ListItem<T>>) -> Result<Vec<T>, ItemFailure> {
    let mut values = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item.into_outcome() {
            ItemOutcome::Value(value) => values.push(value),
            ItemOutcome::Error(payload) => return Err(ItemFailure { index, payload }),
        }
    }
    Ok(values)
}
