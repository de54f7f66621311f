//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    /// No row matches the required id + removed-state predicate.
    #[error("Entity not found")]
    NotFound,

    /// The entity is already in the requested state.
    #[error("Conflicting state: {0}")]
    Conflict(String),
}

impl RepoError {
    /// Whether this error is a storage fault rather than a business outcome.
    pub fn is_storage(&self) -> bool {
        matches!(self, RepoError::Connection(_) | RepoError::Query(_))
    }
}
