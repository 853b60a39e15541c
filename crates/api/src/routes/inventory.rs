//! Route definitions for `/projects/{project_id}/inventory/`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{inventory, method_not_allowed};
use crate::state::AppState;

/// ```text
/// GET    /projects/{project_id}/inventory/         -> list
/// GET    /projects/{project_id}/inventory/{id}/    -> get_by_id
/// *      (any other verb)                          -> 405
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/{project_id}/inventory/",
            get(inventory::list)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/projects/{project_id}/inventory/{id}/",
            get(inventory::get_by_id)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}
