//! Project membership model.

use inventory_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_projects` table linking a user to a project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProject {
    pub id: DbId,
    pub user_id: DbId,
    pub project_id: DbId,
    /// Role code, see [`inventory_core::roles`].
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a membership row.
#[derive(Debug, Clone)]
pub struct CreateUserProject {
    pub user_id: DbId,
    pub project_id: DbId,
    pub role: String,
}
