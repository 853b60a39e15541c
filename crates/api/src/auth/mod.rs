//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 access-token generation and validation.
//! - [`resolver`] -- the [`AuthResolver`] seam between requests and token formats.

pub mod jwt;
pub mod resolver;

pub use resolver::{AuthResolver, Identity, JwtResolver};
