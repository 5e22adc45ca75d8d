use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// All variants except `Internal` are recoverable at the request boundary
/// and surface as distinct caller-visible outcomes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
