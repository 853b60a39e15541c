use std::sync::Arc;

use inventory_db::EntityStore;

use crate::auth::AuthResolver;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Turns a bearer credential into a caller identity.
    pub auth: Arc<dyn AuthResolver>,
    /// Persistence for every entity the API serves.
    pub store: Arc<dyn EntityStore>,
}
