//! Serde helpers for New Relic's loosely typed JSON.
//!
//! Invariants / assumptions:
//! - The API may send `null` where a value is normally present (e.g. `last_reported_at`
//!   for an application that never reported). Such fields decode to their default.
//! - Missing fields are handled by `#[serde(default)]` on the models, not here.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
