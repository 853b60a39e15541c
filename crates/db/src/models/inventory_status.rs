//! Inventory status model and DTOs.

use inventory_core::types::{DbId, Timestamp};
use inventory_core::validation::{clean_optional, clean_required};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::non_null;

/// A row from the `inventory_statuses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryStatus {
    pub id: DbId,
    pub project_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a status. `project_id` always comes from the URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInventoryStatus {
    #[serde(skip)]
    pub project_id: DbId,
    pub status: Option<String>,
}

impl CreateInventoryStatus {
    pub fn cleaned(self) -> Result<Self, String> {
        Ok(Self {
            status: Some(clean_required("status", self.status.as_deref())?),
            ..self
        })
    }
}

/// DTO for partially updating a status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInventoryStatus {
    #[serde(default, deserialize_with = "non_null")]
    pub status: Option<String>,
}

impl UpdateInventoryStatus {
    pub fn cleaned(self) -> Result<Self, String> {
        Ok(Self {
            status: clean_optional("status", self.status.as_deref())?,
        })
    }
}
