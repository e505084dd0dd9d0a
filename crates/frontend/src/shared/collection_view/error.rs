use thiserror::Error;

use crate::shared::api_client::ApiError;

/// Message shown when a failed mutation carries no server text
pub const GENERIC_MUTATION_MESSAGE: &str = "The change could not be saved";

/// Failures reported by the collection view to its caller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListError {
    #[error("Failed to load data: {message}")]
    FetchFailed { message: String },

    #[error("{message}")]
    MutationFailed { message: String },

    #[error("Session expired, please sign in again")]
    AuthExpired,

    #[error("Record {id} is not in the list")]
    RecordNotFound { id: String },

    #[error("The list has been closed")]
    Disposed,
}

impl ListError {
    pub fn from_fetch(error: ApiError) -> Self {
        match error {
            ApiError::Unauthorized => ListError::AuthExpired,
            other => ListError::FetchFailed {
                message: other.to_string(),
            },
        }
    }

    pub fn from_mutation(error: ApiError) -> Self {
        match error {
            ApiError::Unauthorized => ListError::AuthExpired,
            other => ListError::MutationFailed {
                message: other
                    .server_message()
                    .unwrap_or(GENERIC_MUTATION_MESSAGE)
                    .to_string(),
            },
        }
    }
}
