//! Repository for the `inventory_statuses` table.

use inventory_core::types::DbId;
use sqlx::PgPool;

use crate::models::inventory_status::{
    CreateInventoryStatus, InventoryStatus, UpdateInventoryStatus,
};

const COLUMNS: &str = "id, project_id, status, created_at, updated_at";

/// Provides CRUD operations for inventory statuses.
pub struct InventoryStatusRepo;

impl InventoryStatusRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateInventoryStatus,
    ) -> Result<InventoryStatus, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory_statuses (project_id, status)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryStatus>(&query)
            .bind(input.project_id)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InventoryStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory_statuses WHERE id = $1");
        sqlx::query_as::<_, InventoryStatus>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<InventoryStatus>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM inventory_statuses WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, InventoryStatus>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInventoryStatus,
    ) -> Result<Option<InventoryStatus>, sqlx::Error> {
        let query = format!(
            "UPDATE inventory_statuses SET
                status = COALESCE($2, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryStatus>(&query)
            .bind(id)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inventory_statuses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
