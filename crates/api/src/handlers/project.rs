//! Handlers for the `/projects/` resource.
//!
//! Listing is limited to projects the caller is a member of; creating a
//! project makes the caller its owner.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use inventory_core::error::CoreError;
use inventory_core::types::DbId;
use inventory_db::models::project::{CreateProject, Project, UpdateProject};

use super::{parse_create, parse_update};
use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Project";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn find(state: &AppState, id: DbId) -> AppResult<Project> {
    state.store.find_project(id).await?.ok_or_else(|| not_found(id))
}

/// GET /projects/
pub async fn list(user: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.store.list_projects_for_user(user.user_id).await?;
    if projects.is_empty() {
        return Err(AppError::Core(CoreError::NoneFound { entity: ENTITY }));
    }
    Ok(Json(projects))
}

/// GET /projects/{id}/
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Project>> {
    Ok(Json(find(&state, id).await?))
}

/// POST /projects/
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    let input = parse_create(&body, CreateProject::cleaned)?;
    let project = state.store.create_project(&input, user.user_id).await?;

    tracing::info!(user_id = user.user_id, project_id = project.id, "Project created");
    Ok(Json(MessageResponse::new(format!(
        "Project {} created",
        project.name
    ))))
}

/// POST /projects/{id}/ -- same as [`create`]; the id is ignored.
pub async fn create_at(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(_id): IdPath<DbId>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    create(user, State(state), body).await
}

/// PATCH /projects/{id}/
pub async fn update(
    _user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    let current = find(&state, id).await?;
    let input = parse_update(&body, UpdateProject::cleaned, || {
        format!("Cannot update {} project, data invalid", current.name)
    })?;
    let project = state
        .store
        .update_project(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(project_id = id, "Project updated");
    Ok(Json(MessageResponse::new(format!(
        "Project {} updated",
        project.name
    ))))
}

/// PATCH /projects/
pub async fn update_missing_id(_user: AuthUser) -> AppResult<Json<MessageResponse>> {
    Err(AppError::BadRequest("Missing project id!".into()))
}

/// DELETE /projects/{id}/
///
/// Removes every localization, status, type, inventory item and membership
/// of the project along with it.
pub async fn delete(
    _user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let project = find(&state, id).await?;
    if !state.store.delete_project(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(MessageResponse::new(format!(
        "Project {} has been deleted",
        project.name
    ))))
}

/// DELETE /projects/
pub async fn delete_missing_id(_user: AuthUser) -> AppResult<Json<MessageResponse>> {
    Err(AppError::BadRequest("Missing project id!".into()))
}
