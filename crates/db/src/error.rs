/// PostgreSQL SQLSTATE codes treated as bad input rather than server faults:
/// not-null violation, foreign key violation, check violation.
const CONSTRAINT_CODES: &[&str] = &["23502", "23503", "23514"];

/// Errors returned by every [`EntityStore`](crate::store::EntityStore) implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A row was rejected by a column or relational constraint.
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if let Some(code) = db_err.code() {
                if CONSTRAINT_CODES.contains(&code.as_ref()) {
                    return StoreError::Constraint(db_err.message().to_string());
                }
            }
        }
        StoreError::Database(err)
    }
}
