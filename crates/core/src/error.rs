use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A scoped listing matched no rows.
    #[error("No {entity} found")]
    NoneFound { entity: &'static str },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
