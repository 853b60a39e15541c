pub mod health;
pub mod inventory;
pub mod inventory_status;
pub mod inventory_type;
pub mod localization;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the authenticated API route tree.
///
/// Route hierarchy (every path keeps its trailing slash):
///
/// ```text
/// /projects/                                       list, create
/// /projects/{project_id}/                          get, update, delete
///
/// /projects/{project_id}/localizations/            list, create
/// /projects/{project_id}/localizations/{id}/       get, update, delete
///
/// /projects/{project_id}/statuses/                 list, create
/// /projects/{project_id}/statuses/{id}/            get, update, delete
///
/// /projects/{project_id}/types/                    list, create
/// /projects/{project_id}/types/{id}/               get, update, delete
///
/// /projects/{project_id}/inventory/                list (read-only)
/// /projects/{project_id}/inventory/{id}/           get (read-only)
/// ```
///
/// Collection paths answer PATCH/DELETE with 400 (missing id), item paths
/// treat POST as create, and any other verb gets 405 once the caller is
/// authenticated. HEAD is routed to the 405 handler explicitly; a bare
/// `get()` would otherwise answer it.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(project::router())
        .merge(localization::router())
        .merge(inventory_status::router())
        .merge(inventory_type::router())
        .merge(inventory::router())
}
