use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Any failure inside a write transaction. The transaction has been
    /// rolled back by the time this is observed.
    #[error("Persistence failure: {0}")]
    Persistence(String),
}
