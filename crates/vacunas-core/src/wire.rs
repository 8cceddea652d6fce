//! Serde helpers for fields the backend may send as `null`.

use serde::{Deserialize, Deserializer};

/// Decode an optional free-text field, reading `null` as the empty string.
pub(crate) fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
