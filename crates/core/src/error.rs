use crate::types::MovieId;
use crate::validation::rules::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: MovieId },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
