use crate::actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during symptom-record operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    #[error("symptom record not found: {0}")]
    NotFound(String),
    #[error("doctor directory lookup failed: {0}")]
    DirectoryLookup(String),
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RecordError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => RecordError::NotFound(id),
            other => RecordError::ActorCommunicationError(other.to_string()),
        }
    }
}
