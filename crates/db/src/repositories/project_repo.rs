//! Repository for the `projects` table.

use inventory_core::roles::ROLE_OWNER;
use inventory_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::user_project::CreateUserProject;
use crate::repositories::UserProjectRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, company_name, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project row, returning it.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, company_name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.company_name)
            .fetch_one(executor)
            .await
    }

    /// Insert a project and its owner membership in one transaction.
    ///
    /// Either both rows are committed or neither is.
    pub async fn create_with_owner(
        pool: &PgPool,
        input: &CreateProject,
        owner_id: DbId,
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let project = Self::create(&mut *tx, input).await?;
        UserProjectRepo::create(
            &mut *tx,
            &CreateUserProject {
                user_id: owner_id,
                project_id: project.id,
                role: ROLE_OWNER.to_string(),
            },
        )
        .await?;

        tx.commit().await?;
        tracing::debug!(project_id = project.id, owner_id, "Project created with owner link");
        Ok(project)
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the projects a user is a member of, ordered by id.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE id IN (SELECT project_id FROM user_projects WHERE user_id = $1)
             ORDER BY id"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                company_name = COALESCE($3, company_name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.company_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Dependent rows go with it (`ON DELETE CASCADE`).
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
