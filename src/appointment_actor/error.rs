use crate::actor_framework::FrameworkError;
use crate::domain::AppointmentStatus;
use thiserror::Error;

/// Errors that can occur during appointment operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppointmentError {
    #[error("appointment not found: {0}")]
    NotFound(String),
    #[error("doctor not found: {0}")]
    DoctorNotFound(String),
    #[error("invalid transition: appointment is already {0}")]
    InvalidTransition(AppointmentStatus),
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for AppointmentError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => AppointmentError::NotFound(id),
            other => AppointmentError::ActorCommunicationError(other.to_string()),
        }
    }
}
