//! Repository for the `localizations` table.

use inventory_core::types::DbId;
use sqlx::PgPool;

use crate::models::localization::{CreateLocalization, Localization, UpdateLocalization};

const COLUMNS: &str = "id, project_id, place, created_at, updated_at";

/// Provides CRUD operations for localizations.
pub struct LocalizationRepo;

impl LocalizationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateLocalization,
    ) -> Result<Localization, sqlx::Error> {
        let query = format!(
            "INSERT INTO localizations (project_id, place)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Localization>(&query)
            .bind(input.project_id)
            .bind(&input.place)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Localization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM localizations WHERE id = $1");
        sqlx::query_as::<_, Localization>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all localizations for a project, ordered by id.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Localization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM localizations WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Localization>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a localization. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLocalization,
    ) -> Result<Option<Localization>, sqlx::Error> {
        let query = format!(
            "UPDATE localizations SET
                place = COALESCE($2, place),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Localization>(&query)
            .bind(id)
            .bind(&input.place)
            .fetch_optional(pool)
            .await
    }

    /// Delete a localization. Inventory rows referencing it keep a `NULL` reference.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM localizations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
