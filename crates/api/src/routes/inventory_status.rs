//! Route definitions for `/projects/{project_id}/statuses/`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{method_not_allowed, inventory_status};
use crate::state::AppState;

/// ```text
/// GET    /projects/{project_id}/statuses/         -> list
/// POST   /projects/{project_id}/statuses/         -> create
/// PATCH  /projects/{project_id}/statuses/         -> update_missing_id
/// DELETE /projects/{project_id}/statuses/         -> delete_missing_id
///
/// GET    /projects/{project_id}/statuses/{id}/    -> get_by_id
/// POST   /projects/{project_id}/statuses/{id}/    -> create_at
/// PATCH  /projects/{project_id}/statuses/{id}/    -> update
/// DELETE /projects/{project_id}/statuses/{id}/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/{project_id}/statuses/",
            get(inventory_status::list)
                .post(inventory_status::create)
                .patch(inventory_status::update_missing_id)
                .delete(inventory_status::delete_missing_id)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/projects/{project_id}/statuses/{id}/",
            get(inventory_status::get_by_id)
                .post(inventory_status::create_at)
                .patch(inventory_status::update)
                .delete(inventory_status::delete)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}
