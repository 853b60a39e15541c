//! Repository for the `user_projects` membership table.

use inventory_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::user_project::{CreateUserProject, UserProject};

const COLUMNS: &str = "id, user_id, project_id, role, created_at, updated_at";

pub struct UserProjectRepo;

impl UserProjectRepo {
    /// Insert a membership row. Accepts a transaction so it can be paired
    /// with the project insert.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateUserProject,
    ) -> Result<UserProject, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_projects (user_id, project_id, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProject>(&query)
            .bind(input.user_id)
            .bind(input.project_id)
            .bind(&input.role)
            .fetch_one(executor)
            .await
    }

    /// List all memberships of a project, ordered by id.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<UserProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_projects WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, UserProject>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
