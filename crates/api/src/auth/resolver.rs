//! Resolution of a bearer credential into the caller's identity.
//!
//! Handlers only ever see an [`Identity`]; the token format stays behind the
//! [`AuthResolver`] held in [`AppState`](crate::state::AppState).

use inventory_core::error::CoreError;
use inventory_core::types::DbId;

use super::jwt::JwtConfig;

/// The authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: DbId,
}

/// Turns the credential from an `Authorization: Bearer` header into an
/// [`Identity`], or rejects it with [`CoreError::Unauthorized`].
pub trait AuthResolver: Send + Sync {
    fn resolve(&self, credential: &str) -> Result<Identity, CoreError>;
}

/// [`AuthResolver`] accepting HS256 access tokens signed with the configured secret.
#[derive(Debug, Clone)]
pub struct JwtResolver {
    config: JwtConfig,
}

impl JwtResolver {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl AuthResolver for JwtResolver {
    fn resolve(&self, credential: &str) -> Result<Identity, CoreError> {
        let claims = self.config.verify(credential).map_err(|err| {
            tracing::debug!(error = %err, "Rejected access token");
            CoreError::Unauthorized("Invalid or expired token".into())
        })?;
        Ok(Identity {
            user_id: claims.sub,
        })
    }
}
