//! Null-tolerant field deserialization

use serde::{Deserialize, Deserializer};

/// Reads an explicit JSON `null` as the field's default value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
