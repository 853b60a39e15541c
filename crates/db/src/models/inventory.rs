//! Inventory item model.
//!
//! Items are read-only over HTTP; [`CreateInventory`] is used to seed rows
//! directly through the store.

use inventory_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `inventory` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inventory {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub localization_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub type_id: Option<DbId>,
    pub quantity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an inventory item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInventory {
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub localization_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub type_id: Option<DbId>,
    /// Defaults to 0 if omitted.
    pub quantity: Option<i32>,
}
