//! Inventory type model and DTOs.

use inventory_core::types::{DbId, Timestamp};
use inventory_core::validation::{clean_optional, clean_required};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::non_null;

/// A row from the `inventory_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryType {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an inventory type. `project_id` always comes from the URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInventoryType {
    #[serde(skip)]
    pub project_id: DbId,
    pub name: Option<String>,
}

impl CreateInventoryType {
    pub fn cleaned(self) -> Result<Self, String> {
        Ok(Self {
            name: Some(clean_required("name", self.name.as_deref())?),
            ..self
        })
    }
}

/// DTO for partially updating an inventory type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInventoryType {
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
}

impl UpdateInventoryType {
    pub fn cleaned(self) -> Result<Self, String> {
        Ok(Self {
            name: clean_optional("name", self.name.as_deref())?,
        })
    }
}
