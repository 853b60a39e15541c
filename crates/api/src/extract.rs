//! `Path` wrapper whose rejection is an [`AppError`], so a non-integer id
//! gets the same JSON error shape as every other failure.
//!
//! Bodies are taken as raw `Bytes` and parsed inside the handlers, after the
//! addressed row or parent project has been resolved.

use axum::extract::FromRequestParts;

use crate::error::AppError;

/// `Path<T>` with an [`AppError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct IdPath<T>(pub T);
