use crate::actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during availability-slot operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SlotError {
    #[error("slot not found: {0}")]
    NotFound(String),
    #[error("slot unavailable: {0}")]
    SlotUnavailable(String),
    #[error("appointment creation failed: {0}")]
    AppointmentCreation(String),
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for SlotError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => SlotError::NotFound(id),
            other => SlotError::ActorCommunicationError(other.to_string()),
        }
    }
}
