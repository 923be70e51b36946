use thiserror::Error;

use crate::domain::pet::entities::PetValidationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error(transparent)]
    InvalidPetData(#[from] PetValidationError),

    /// The completion service could not be reached.
    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("Invalid JSON response from model: {raw}\nError: {reason}")]
    MalformedModelOutput { raw: String, reason: String },

    #[error("{0}")]
    ExternalServiceError(String),
}
