//! Per-resource HTTP handlers.
//!
//! Every handler takes [`AuthUser`] as its first extractor, so a request is
//! authenticated before its path, body or method is looked at. Write bodies
//! arrive as raw bytes and are decoded only once the target exists.

pub mod inventory;
pub mod inventory_status;
pub mod inventory_type;
pub mod localization;
pub mod project;

use axum::http::Uri;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult, MISSING_REQUIREMENTS};
use crate::middleware::auth::AuthUser;

/// Fallback for every routed path: the verb is not served there.
pub async fn method_not_allowed(_user: AuthUser) -> AppError {
    AppError::MethodNotAllowed
}

/// Router-wide fallback for paths no route matches.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// Deserialize and clean a create body. Any failure is reported as
/// [`MISSING_REQUIREMENTS`].
pub(crate) fn parse_create<T: DeserializeOwned>(
    body: &[u8],
    clean: impl FnOnce(T) -> Result<T, String>,
) -> AppResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| e.to_string())
        .and_then(clean)
        .map_err(|reason| {
            tracing::debug!(%reason, "Rejected create body");
            AppError::BadRequest(MISSING_REQUIREMENTS.to_string())
        })
}

/// Deserialize and clean a partial-update body, reporting failure with the
/// entity-specific `invalid` message.
pub(crate) fn parse_update<T: DeserializeOwned>(
    body: &[u8],
    clean: impl FnOnce(T) -> Result<T, String>,
    invalid: impl FnOnce() -> String,
) -> AppResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| e.to_string())
        .and_then(clean)
        .map_err(|reason| {
            tracing::debug!(%reason, "Rejected update body");
            AppError::BadRequest(invalid())
        })
}
