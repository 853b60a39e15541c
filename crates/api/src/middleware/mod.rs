//! Request extractors that gate handlers.
//!
//! - [`auth::AuthUser`] -- the caller identified by the `Authorization` header.

pub mod auth;
