//! Serde helpers shared by the request DTOs.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating `""` the same as an absent key.
///
/// Use with `#[serde(default, deserialize_with = "empty_string_as_none")]`
/// so that both a missing key and an empty value become `None`.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
