//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates

use serde::{Deserialize, Deserializer};

pub mod inventory;
pub mod inventory_status;
pub mod inventory_type;
pub mod localization;
pub mod project;
pub mod user_project;

/// Deserialize a field of a partial update that may be omitted but not `null`.
///
/// Combine with `#[serde(default)]` so an absent key becomes `None` while an
/// explicit `null` is a deserialization error.
pub(crate) fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(serde::de::Error::custom("null is not a valid value")),
    }
}
