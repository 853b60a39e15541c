//! Repository for the `inventory_types` table.

use inventory_core::types::DbId;
use sqlx::PgPool;

use crate::models::inventory_type::{CreateInventoryType, InventoryType, UpdateInventoryType};

const COLUMNS: &str = "id, project_id, name, created_at, updated_at";

/// Provides CRUD operations for inventory types.
pub struct InventoryTypeRepo;

impl InventoryTypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateInventoryType,
    ) -> Result<InventoryType, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory_types (project_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryType>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InventoryType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory_types WHERE id = $1");
        sqlx::query_as::<_, InventoryType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<InventoryType>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM inventory_types WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, InventoryType>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInventoryType,
    ) -> Result<Option<InventoryType>, sqlx::Error> {
        let query = format!(
            "UPDATE inventory_types SET
                name = COALESCE($2, name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryType>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inventory_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
