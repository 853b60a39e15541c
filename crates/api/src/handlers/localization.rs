//! Handlers for `/projects/{project_id}/localizations/`.
//!
//! Deleting a localization clears it from any inventory item that referenced it.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use inventory_core::error::CoreError;
use inventory_core::types::DbId;
use inventory_db::models::localization::{CreateLocalization, Localization, UpdateLocalization};

use super::{parse_create, parse_update};
use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Localization";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn find(state: &AppState, id: DbId) -> AppResult<Localization> {
    state.store.find_localization(id).await?.ok_or_else(|| not_found(id))
}

/// GET /projects/{project_id}/localizations/
pub async fn list(
    _user: AuthUser,
    State(state): State<AppState>,
    IdPath(project_id): IdPath<DbId>,
) -> AppResult<Json<Vec<Localization>>> {
    let rows = state.store.list_localizations(project_id).await?;
    if rows.is_empty() {
        return Err(AppError::Core(CoreError::NoneFound { entity: ENTITY }));
    }
    Ok(Json(rows))
}

/// GET /projects/{project_id}/localizations/{id}/
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    IdPath((_project_id, id)): IdPath<(DbId, DbId)>,
) -> AppResult<Json<Localization>> {
    Ok(Json(find(&state, id).await?))
}

/// POST /projects/{project_id}/localizations/
pub async fn create(
    _user: AuthUser,
    State(state): State<AppState>,
    IdPath(project_id): IdPath<DbId>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    let project = state
        .store
        .find_project(project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let mut input = parse_create(&body, CreateLocalization::cleaned)?;
    input.project_id = project.id;
    let row = state.store.create_localization(&input).await?;

    tracing::info!(project_id, id = row.id, "Localization created");
    Ok(Json(MessageResponse::new(format!(
        "Localization: {} add to {} project",
        row.place, project.name
    ))))
}

/// POST /projects/{project_id}/localizations/{id}/ -- same as [`create`]; the id is ignored.
pub async fn create_at(
    user: AuthUser,
    state: State<AppState>,
    IdPath((project_id, _id)): IdPath<(DbId, DbId)>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    create(user, state, IdPath(project_id), body).await
}

/// PATCH /projects/{project_id}/localizations/{id}/
pub async fn update(
    _user: AuthUser,
    State(state): State<AppState>,
    IdPath((_project_id, id)): IdPath<(DbId, DbId)>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    let current = find(&state, id).await?;
    let input = parse_update(&body, UpdateLocalization::cleaned, || {
        format!("Cannot update {} localization, data invalid", current.place)
    })?;
    let row = state
        .store
        .update_localization(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "Localization updated");
    Ok(Json(MessageResponse::new(format!(
        "Localization {} updated",
        row.place
    ))))
}

/// PATCH /projects/{project_id}/localizations/
pub async fn update_missing_id(_user: AuthUser) -> AppResult<Json<MessageResponse>> {
    Err(AppError::BadRequest("Missing localization id!".into()))
}

/// DELETE /projects/{project_id}/localizations/{id}/
pub async fn delete(
    _user: AuthUser,
    State(state): State<AppState>,
    IdPath((_project_id, id)): IdPath<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    let row = find(&state, id).await?;
    if !state.store.delete_localization(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(id, "Localization deleted");
    Ok(Json(MessageResponse::new(format!(
        "Localization {} has been deleted",
        row.place
    ))))
}

/// DELETE /projects/{project_id}/localizations/
pub async fn delete_missing_id(_user: AuthUser) -> AppResult<Json<MessageResponse>> {
    Err(AppError::BadRequest("Missing Localization id!".into()))
}
