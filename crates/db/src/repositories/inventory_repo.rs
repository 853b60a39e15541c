//! Repository for the `inventory` table.

use inventory_core::types::DbId;
use sqlx::PgPool;

use crate::models::inventory::{CreateInventory, Inventory};

const COLUMNS: &str = "id, project_id, name, description, localization_id, status_id, type_id, \
                       quantity, created_at, updated_at";

/// Read access to inventory items, plus an insert used for seeding.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Insert an inventory item. If `quantity` is `None`, defaults to 0.
    pub async fn create(pool: &PgPool, input: &CreateInventory) -> Result<Inventory, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory
                (project_id, name, description, localization_id, status_id, type_id, quantity)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inventory>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.localization_id)
            .bind(input.status_id)
            .bind(input.type_id)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inventory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory WHERE id = $1");
        sqlx::query_as::<_, Inventory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Inventory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Inventory>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
