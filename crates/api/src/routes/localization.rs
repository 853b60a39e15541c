//! Route definitions for `/projects/{project_id}/localizations/`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{method_not_allowed, localization};
use crate::state::AppState;

/// ```text
/// GET    /projects/{project_id}/localizations/         -> list
/// POST   /projects/{project_id}/localizations/         -> create
/// PATCH  /projects/{project_id}/localizations/         -> update_missing_id
/// DELETE /projects/{project_id}/localizations/         -> delete_missing_id
///
/// GET    /projects/{project_id}/localizations/{id}/    -> get_by_id
/// POST   /projects/{project_id}/localizations/{id}/    -> create_at
/// PATCH  /projects/{project_id}/localizations/{id}/    -> update
/// DELETE /projects/{project_id}/localizations/{id}/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/{project_id}/localizations/",
            get(localization::list)
                .post(localization::create)
                .patch(localization::update_missing_id)
                .delete(localization::delete_missing_id)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/projects/{project_id}/localizations/{id}/",
            get(localization::get_by_id)
                .post(localization::create_at)
                .patch(localization::update)
                .delete(localization::delete)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}
