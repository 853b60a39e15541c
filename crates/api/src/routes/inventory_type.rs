//! Route definitions for `/projects/{project_id}/types/`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{method_not_allowed, inventory_type};
use crate::state::AppState;

/// ```text
/// GET    /projects/{project_id}/types/         -> list
/// POST   /projects/{project_id}/types/         -> create
/// PATCH  /projects/{project_id}/types/         -> update_missing_id
/// DELETE /projects/{project_id}/types/         -> delete_missing_id
///
/// GET    /projects/{project_id}/types/{id}/    -> get_by_id
/// POST   /projects/{project_id}/types/{id}/    -> create_at
/// PATCH  /projects/{project_id}/types/{id}/    -> update
/// DELETE /projects/{project_id}/types/{id}/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/{project_id}/types/",
            get(inventory_type::list)
                .post(inventory_type::create)
                .patch(inventory_type::update_missing_id)
                .delete(inventory_type::delete_missing_id)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/projects/{project_id}/types/{id}/",
            get(inventory_type::get_by_id)
                .post(inventory_type::create_at)
                .patch(inventory_type::update)
                .delete(inventory_type::delete)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}
