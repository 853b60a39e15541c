//! Handlers for `/projects/{project_id}/inventory/`.
//!
//! Inventory is read-only over HTTP; every other verb falls through to
//! [`method_not_allowed`](super::method_not_allowed).

use axum::extract::State;
use axum::Json;
use inventory_core::error::CoreError;
use inventory_core::types::DbId;
use inventory_db::models::inventory::Inventory;

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "Inventory";

/// GET /projects/{project_id}/inventory/
pub async fn list(
    _user: AuthUser,
    State(state): State<AppState>,
    IdPath(project_id): IdPath<DbId>,
) -> AppResult<Json<Vec<Inventory>>> {
    let items = state.store.list_inventory(project_id).await?;
    if items.is_empty() {
        return Err(AppError::Core(CoreError::NoneFound { entity: ENTITY }));
    }
    Ok(Json(items))
}

/// GET /projects/{project_id}/inventory/{id}/
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    IdPath((_project_id, id)): IdPath<(DbId, DbId)>,
) -> AppResult<Json<Inventory>> {
    let item = state
        .store
        .find_inventory(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(item))
}
