//! Route definitions for the `/projects/` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{method_not_allowed, project};
use crate::state::AppState;

/// ```text
/// GET    /projects/                 -> list
/// POST   /projects/                 -> create
/// PATCH  /projects/                 -> update_missing_id
/// DELETE /projects/                 -> delete_missing_id
///
/// GET    /projects/{project_id}/    -> get_by_id
/// POST   /projects/{project_id}/    -> create_at
/// PATCH  /projects/{project_id}/    -> update
/// DELETE /projects/{project_id}/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/",
            get(project::list)
                .post(project::create)
                .patch(project::update_missing_id)
                .delete(project::delete_missing_id)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/projects/{project_id}/",
            get(project::get_by_id)
                .post(project::create_at)
                .patch(project::update)
                .delete(project::delete)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}
