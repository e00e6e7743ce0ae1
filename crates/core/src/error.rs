use crate::types::MovieId;
use crate::validation::ValidationFailure;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: MovieId },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("Origin not allowed: {0}")]
    OriginNotAllowed(String),
}
